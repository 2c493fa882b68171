use otgw_monitor::{GatewayMode, Listener, MonitorConfig, SerialTransport};
use std::time::Duration;

fn usage(program: &str) {
    eprintln!("Usage: {} <monitor|intercept> [config.json]", program);
    eprintln!();
    eprintln!("Waits for the gateway to request a session on the configured");
    eprintln!("serial device, then prints every OpenTherm frame it relays.");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.get(0).map_or("otgw-monitor", |s| s.as_str());

    if args.len() < 2 || args.len() > 3 {
        usage(program);
        return Err("Invalid arguments".into());
    }

    let mode: GatewayMode = args[1].parse().map_err(|e| {
        usage(program);
        e
    })?;

    let mut config = match args.get(2) {
        Some(path) => MonitorConfig::from_file(path)?,
        None => MonitorConfig::default(),
    };
    config.mode = mode;

    println!(
        "Opening {} at {} baud ({} mode)...",
        config.device, config.baud_rate, config.mode
    );
    let transport = SerialTransport::open(
        &config.device,
        config.baud_rate,
        Duration::from_millis(config.read_timeout_ms),
    )?;

    let mut listener = Listener::new(transport, config);
    listener.run()?;

    Ok(())
}
