use smhi_forecast::{Completion, ForecastClient, ForecastError, ParameterName};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), ForecastError> {
    let client = ForecastClient::builder().build()?;
    let publisher = client.publisher(57.7088700, 11.9745600);

    // Both subscribers are served by a single request.
    let wind = publisher.sink(
        |document| {
            let speed = document.view().get(ParameterName::WindSpeed).value();
            println!("[wind] {speed} m/s");
        },
        |completion| {
            if let Completion::Failure(error) = completion {
                eprintln!("[wind] failed: {error}");
            }
        },
    );
    let temperature = publisher.on_result(|result| match result {
        Ok(document) => {
            let value = document.view().get(ParameterName::AirTemperature).value();
            println!("[temperature] {value} °C");
        }
        Err(error) => eprintln!("[temperature] failed: {error}"),
    });

    // A third subscriber changes its mind before the response arrives.
    let impatient = publisher.sink(|_| println!("[impatient] never printed"), |_| {});
    impatient.cancel();

    let document = publisher.result().await.map_err(|_| ForecastError::Cancelled)?;
    println!("{} entries, state {:?}", document.time_series.len(), publisher.state());

    // Let the callbacks above finish printing before the handles are dropped.
    tokio::time::sleep(Duration::from_millis(10)).await;
    drop((wind, temperature));
    Ok(())
}
