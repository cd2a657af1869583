use chrono::{Days, Utc};
use clap::Parser;
use forexrateapi::{
	currency::list::*,
	endpoint::{Change, Convert, Historical, Hourly, Live, Ohlc, Timeframe},
	Client,
};
use tracing_subscriber::EnvFilter;

/// Calls every endpoint once and prints the bodies.
#[derive(Parser, Debug)]
pub struct Cli {
	/// The API key.
	#[clap(long, env = "FOREXRATEAPI_API_KEY")]
	api_key: String,
	/// The server, `us` or `eu`.
	#[clap(long, env = "FOREXRATEAPI_SERVER", default_value = "us")]
	server: String,
}

#[tokio::main]
async fn main() -> Result<(), forexrateapi::Error> {
	tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
	let cli = Cli::parse();

	let mut client = Client::default();
	client.set_api_key(cli.api_key).set_server(&cli.server);

	let today = Utc::now().date_naive();
	let start = today.checked_sub_days(Days::new(2)).unwrap_or(today).to_string();
	let end = today.checked_sub_days(Days::new(1)).unwrap_or(today).to_string();
	let currencies = [AUD, CAD, GBP, JPY];

	println!("{:?}", client.fetch_symbols().await?.body().await?);
	println!("{:?}", client.fetch_live(&Live::new().base(USD).currencies(currencies)).await?.body().await?);
	println!("{:?}", client.fetch_historical(&Historical::new(&start).base(USD).currencies(currencies)).await?.body().await?);
	println!("{:?}", client.hourly(&Hourly::new(USD, EUR).range(&start, &end)).await?.body().await?);
	println!("{:?}", client.ohlc(&Ohlc::new(USD, EUR).date(start.as_str())).await?.body().await?);
	println!("{:?}", client.convert(&Convert::new(USD, EUR, 100.).date(start.as_str())).await?.body().await?);
	println!("{:?}", client.timeframe(&Timeframe::new(&start, &end).base(USD).currencies(currencies)).await?.body().await?);
	println!("{:?}", client.change(&Change::new(&start, &end).base(USD).currencies(currencies)).await?.body().await?);
	println!("{:?}", client.usage().await?.body().await?);
	Ok(())
}
