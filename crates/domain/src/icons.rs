//! Weather icon mapping
//!
//! Fixed lookup from the upstream's short weather category to an icon
//! file name. Unknown categories fall back to [`DEFAULT_ICON`] rather
//! than failing.

/// Icon used for any unrecognized weather category
pub const DEFAULT_ICON: &str = "cloudy.png";

/// Map a weather category (e.g. "Rain", "Clear") to an icon file name
#[must_use]
pub fn icon_for(condition_main: &str) -> &'static str {
    match condition_main {
        "Rain" => "rain.png",
        "Clear" => "sun.png",
        "Thunderstorm" | "Tornado" => "storm.png",
        "Drizzle" => "light rain.png",
        "Snow" => "snow.png",
        "Clouds" | "Mist" | "Fog" | "Haze" | "Smoke" | "Dust" | "Sand" | "Ash" | "Squall" => {
            "cloudy.png"
        },
        _ => DEFAULT_ICON,
    }
}
