use std::sync::Arc;

use toolbox_di::{Inject, LazyInject, OptionalInject, Provider, TypeRegistry};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Wiring at start-up
    let _analytics = Provider::<dyn Analytics>::from_arc(Arc::new(ConsoleAnalytics));
    let _config = Provider::new(AppConfig {
        app_name: "toolbox".to_string(),
    });
    if std::env::var_os("CRASH_REPORTING").is_some() {
        Provider::new(Crashlytics);
    }

    println!("{:?}", TypeRegistry::global());

    let screen = HomeScreen::new();
    screen.loaded();
}

#[derive(Debug)]
struct AppConfig {
    app_name: String,
}

trait Analytics: Send + Sync {
    fn log(&self, event: &str);
}
struct ConsoleAnalytics;
impl Analytics for ConsoleAnalytics {
    fn log(&self, event: &str) {
        println!("Logged event: {event}");
    }
}

struct Crashlytics;

struct HomeScreen {
    analytics: Inject<dyn Analytics>,
    config: LazyInject<AppConfig>,
    crashes: OptionalInject<Crashlytics>,
}
impl HomeScreen {
    fn new() -> Self {
        HomeScreen {
            analytics: Inject::new(),
            config: LazyInject::new(),
            crashes: OptionalInject::new(),
        }
    }

    fn loaded(&self) {
        self.analytics
            .log(&format!("{} home screen loaded", self.config.app_name));
        match self.crashes.get() {
            Some(_) => println!("Crash reporting enabled"),
            None => println!("No crash reporting configured"),
        }
    }
}
