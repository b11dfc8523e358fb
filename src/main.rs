use pico_args::Arguments;
use std::time::Duration;
use toastline::config;
use toastline::error::{Error, Result};
use toastline::notifications::{Channel, DeliveryOptions, Notification, Registry, Severity};
use tracing_subscriber::EnvFilter;

fn arg_error(err: pico_args::Error) -> Error {
    Error::InvalidInput(err.to_string())
}

/// Reads an optional numeric flag, rejecting negative values instead of
/// clamping them.
fn non_negative(args: &mut Arguments, key: &'static str) -> Result<Option<u64>> {
    match args.opt_value_from_str::<_, i64>(key).map_err(arg_error)? {
        Some(value) if value < 0 => Err(Error::InvalidInput(format!(
            "{key} must not be negative, got {value}"
        ))),
        Some(value) => Ok(Some(value as u64)),
        None => Ok(None),
    }
}

fn print_toasts(toasts: &[Notification]) {
    println!("toasts ({}):", toasts.len());
    for toast in toasts {
        match toast.lifetime_hint() {
            Some(hint) => println!(
                "  {} {}: {} [{}]",
                toast.severity().emoji(),
                toast.title(),
                toast.message(),
                hint
            ),
            None => println!(
                "  {} {}: {}",
                toast.severity().emoji(),
                toast.title(),
                toast.message()
            ),
        }
    }
}

fn print_modals(modals: &[Notification]) {
    println!("modals ({}):", modals.len());
    for modal in modals {
        println!(
            "  {} {}: {}",
            modal.severity().emoji(),
            modal.title(),
            modal.message()
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = Arguments::from_env();
    let cfg = config::load().unwrap_or_default();

    let severity: Severity = match args
        .opt_value_from_str::<_, String>("--severity")
        .map_err(arg_error)?
    {
        Some(name) => name.parse()?,
        None => cfg
            .severity
            .as_deref()
            .unwrap_or(config::DEFAULT_SEVERITY)
            .parse()?,
    };
    let channel: Channel = match args
        .opt_value_from_str::<_, String>("--channel")
        .map_err(arg_error)?
    {
        Some(name) => name.parse()?,
        None => cfg
            .channel
            .as_deref()
            .unwrap_or(config::DEFAULT_CHANNEL)
            .parse()?,
    };

    let title = args
        .opt_value_from_str::<_, String>("--title")
        .map_err(arg_error)?
        .unwrap_or_else(|| "Notification".to_string());
    let message = args
        .opt_value_from_str::<_, String>("--message")
        .map_err(arg_error)?
        .unwrap_or_else(|| "Triggered from the command line".to_string());

    let duration_secs = non_negative(&mut args, "--duration")?.or(cfg.duration_secs);
    let delay_ms = non_negative(&mut args, "--delay-ms")?;
    let grouped = args.contains("--grouped") || cfg.grouped.unwrap_or(false);
    let repeat = non_negative(&mut args, "--repeat")?.unwrap_or(1).max(1);
    let gap_ms = non_negative(&mut args, "--gap-ms")?.unwrap_or(100);
    let watch_secs = non_negative(&mut args, "--watch-secs")?.unwrap_or(config::DEFAULT_WATCH_SECS);

    let mut options = DeliveryOptions::new();
    if let Some(secs) = duration_secs {
        options = options.with_duration(Duration::from_secs(secs));
    }
    if let Some(ms) = delay_ms {
        options = options.delayed(Duration::from_millis(ms));
    }
    if grouped {
        options = options.grouped();
    }

    let registry = Registry::new();

    let mut toast_rx = registry.watch_toasts();
    let mut modal_rx = registry.watch_modals();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                changed = toast_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let toasts = toast_rx.borrow_and_update().clone();
                    print_toasts(&toasts);
                }
                changed = modal_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let modals = modal_rx.borrow_and_update().clone();
                    print_modals(&modals);
                }
            }
        }
    });

    for i in 0..repeat {
        registry
            .show(severity, &title, &message, channel, options.clone())
            .await;
        if i + 1 < repeat {
            tokio::time::sleep(Duration::from_millis(gap_ms)).await;
        }
    }

    // Keep observing so auto-expiry is visible before the demo exits.
    tokio::time::sleep(Duration::from_secs(watch_secs)).await;
    Ok(())
}
