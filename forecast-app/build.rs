use std::env;

/// Environment variable holding the backend base URL at build time.
const API_URL_VAR: &str = "WEATHER_API_URL";

fn main() {
    // Bake the backend base URL into the binary. Unset means same-origin:
    // in production the app sits behind a reverse proxy that forwards /api/*.
    let api_url = env::var(API_URL_VAR).unwrap_or_default();
    println!("cargo:rustc-env=FORECAST_API_URL={}", api_url.trim());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={}", API_URL_VAR);
}
