use smhi_forecast::{ForecastClient, ForecastError, ParameterName};

#[tokio::main]
async fn main() -> Result<(), ForecastError> {
    let client = ForecastClient::builder().build()?;
    let document = client.fetch(67.8557, 20.2253).await?;

    let view = document.view();
    let temperatures = view.project(ParameterName::AirTemperature, |p| p.value());
    let precipitation = view.project(ParameterName::PrecipitationIntensityMean, |p| p.value());

    println!("{:<26} {:>8} {:>10}", "valid time", "°C", "mm/h");
    for ((time, temperature), (_, rain)) in temperatures.iter().zip(&precipitation).take(24) {
        println!("{:<26} {:>8.1} {:>10.1}", time.to_rfc3339(), temperature, rain);
    }

    let coldest = temperatures
        .iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(time, value)| format!("{value} °C at {time}"));
    println!("Coldest: {}", coldest.unwrap_or_else(|| "no data".to_string()));
    Ok(())
}
