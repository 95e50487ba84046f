use cfg_if::cfg_if;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        /// Route tracing output to the browser console.
        pub fn init() {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));

            let wasm_layer = tracing_wasm::WASMLayer::new(tracing_wasm::WASMLayerConfig::default());

            tracing_subscriber::registry()
                .with(filter)
                .with(wasm_layer)
                .init();

            // Panics with stacktrace
            #[cfg(feature = "console_error_panic_hook")]
            console_error_panic_hook::set_once();
        }
    } else {
        use once_cell::sync::OnceCell;
        use std::env;
        use std::io;
        use tracing_appender::non_blocking::WorkerGuard;
        use tracing_subscriber::fmt;

        // The non-blocking file writer stops flushing once its guard drops.
        static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

        /// Console plus daily-rolling file logging. Filter via RUST_LOG,
        /// file location via RUST_LOG_FILE (default logs/dasher.log).
        pub fn init() {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));

            let console_layer = fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true)
                .compact();

            let log_path = env::var("RUST_LOG_FILE").unwrap_or_else(|_| "logs/dasher.log".to_string());
            let path = std::path::Path::new(&log_path);
            let (nb_writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(
                path.parent().unwrap_or(std::path::Path::new(".")),
                path.file_name().unwrap_or(std::ffi::OsStr::new("dasher.log")),
            ));
            let _ = FILE_GUARD.set(guard);

            let file_layer = fmt::layer()
                .with_writer(nb_writer)
                .with_target(true)
                .with_level(true)
                .compact();

            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .init();
        }
    }
}
