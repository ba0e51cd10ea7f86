use smhi_forecast::{CutoffPolicy, ForecastClient, ForecastConfig, ForecastError, ParameterName};

#[tokio::main]
async fn main() -> Result<(), ForecastError> {
    let client = ForecastClient::builder()
        .config(ForecastConfig {
            cutoff: CutoffPolicy::skewed(),
            timeout_secs: Some(10),
            ..Default::default()
        })
        .build()?;

    // Stockholm, Kungsholmen
    let document = client.fetch(59.3258414, 17.7018733).await?;
    let view = client.view(&document);

    println!("Forecast approved at {}", document.approved_time);
    if !view.is_relevant() {
        println!("The forecast has expired.");
        return Ok(());
    }

    if let Some(entry) = view.current() {
        println!("Valid from {}", entry.valid_time);
        if let Some(symbol) = entry.weather_symbol() {
            println!("  {:?}", symbol);
        }
    }
    for name in [
        ParameterName::AirTemperature,
        ParameterName::WindSpeed,
        ParameterName::WindGustSpeed,
        ParameterName::RelativeHumidity,
        ParameterName::AirPressure,
    ] {
        let parameter = view.get(name);
        if parameter.is_unknown() {
            println!("  {:<6} not in forecast", name);
        } else {
            println!("  {:<6} {} {}", name, parameter.value(), parameter.unit);
        }
    }

    Ok(())
}
