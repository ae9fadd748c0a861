pub const KG_TO_LB: f64 = 2.20462;
pub const IN_TO_CM: f64 = 2.54;

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * KG_TO_LB
}

pub fn lb_to_kg(lb: f64) -> f64 {
    lb / KG_TO_LB
}

pub fn cm_to_in(cm: f64) -> f64 {
    cm / IN_TO_CM
}

pub fn in_to_cm(inches: f64) -> f64 {
    inches * IN_TO_CM
}

/// Rounding for converted values that get persisted (2 decimal places).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Lenient parse of a compound imperial height string ("5'10").
///
/// Splits on `'`: first segment is feet, second is inches. Missing or
/// unparseable segments read as 0; this never errors. Inches above 11 are
/// NOT carried into feet here, consumers decide whether to cap them.
pub fn parse_feet_inches(s: &str) -> (f64, f64) {
    let mut parts = s.splitn(2, '\'');
    let feet = parts.next().map(parse_num).unwrap_or(0.0);
    let inches = parts.next().map(parse_num).unwrap_or(0.0);
    (feet, inches)
}

/// Lenient parse of a metric height string ("178").
pub fn parse_metric_height(s: &str) -> f64 {
    parse_num(s)
}

fn parse_num(s: &str) -> f64 {
    let v: f64 = s.trim().parse().unwrap_or(0.0);
    if v.is_finite() { v } else { 0.0 }
}
