use uvdata_core::{Coordinates, UvSample};

fn value(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

/// Highest reading in the series together with its timestamp.
fn peak(samples: &[UvSample], pick: impl Fn(&UvSample) -> Option<f64>) -> Option<(&str, f64)> {
    samples
        .iter()
        .filter_map(|s| pick(s).map(|v| (s.timestamp.as_str(), v)))
        .fold(None, |best, cur| match best {
            Some((_, v)) if v >= cur.1 => best,
            _ => Some(cur),
        })
}

pub fn render_samples(samples: &[UvSample]) -> String {
    let mut out = format!("{:<16}  {:>8}  {:>8}\n", "time", "forecast", "measured");
    for s in samples {
        out.push_str(&format!(
            "{:<16}  {:>8}  {:>8}\n",
            s.timestamp,
            value(s.forecast),
            value(s.measured)
        ));
    }

    for (label, found) in [
        ("forecast", peak(samples, |s| s.forecast)),
        ("measured", peak(samples, |s| s.measured)),
    ] {
        match found {
            Some((at, v)) => out.push_str(&format!("Peak {label}: {v:.2} at {at}\n")),
            None => out.push_str(&format!("Peak {label}: no data\n")),
        }
    }
    out
}

pub fn render_cities(cities: &[(&str, Coordinates)]) -> String {
    cities
        .iter()
        .map(|(name, c)| format!("{name:<18} {:>9} {:>11}\n", c.latitude, c.longitude))
        .collect()
}
