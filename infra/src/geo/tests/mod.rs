//! Unit tests for geolocation

use hrm_core::services::registration::GeoLocationServiceTrait;

use crate::config::{GeoConfig, GeoProvider};
use crate::geo::{create_geo_locator, IpInfoGeoLocator, IpInfoResponse, StaticGeoLocator};

fn response(city: Option<&str>, region: Option<&str>, country: Option<&str>) -> IpInfoResponse {
    IpInfoResponse {
        ip: Some("81.2.69.160".to_string()),
        city: city.map(str::to_string),
        region: region.map(str::to_string),
        country: country.map(str::to_string),
        bogon: false,
    }
}

#[test]
fn test_describe_full_location() {
    let info = response(Some("London"), Some("England"), Some("GB"));
    assert_eq!(
        info.describe("81.2.69.160").as_deref(),
        Some("London, England, GB (81.2.69.160)")
    );
}

#[test]
fn test_describe_skips_missing_parts() {
    let info = response(None, Some(""), Some("GB"));
    assert_eq!(info.describe("81.2.69.160").as_deref(), Some("GB (81.2.69.160)"));
}

#[test]
fn test_describe_without_location() {
    let info = response(None, None, None);
    assert!(info.describe("81.2.69.160").is_none());
}

#[test]
fn test_deserialize_ipinfo_payload() {
    let json = r#"{
        "ip": "81.2.69.160",
        "city": "London",
        "region": "England",
        "country": "GB",
        "loc": "51.5085,-0.1257",
        "timezone": "Europe/London"
    }"#;

    let info: IpInfoResponse = serde_json::from_str(json).unwrap();
    assert!(!info.bogon);
    assert_eq!(
        info.describe("ignored").as_deref(),
        Some("London, England, GB (81.2.69.160)")
    );
}

#[tokio::test]
async fn test_static_locator() {
    let locator = StaticGeoLocator::new("Test City, GB");
    assert_eq!(
        locator.locate("10.0.0.1").await.unwrap(),
        "Test City, GB (10.0.0.1)"
    );
}

#[tokio::test]
async fn test_create_geo_locator() {
    let locator = create_geo_locator(&GeoConfig::default()).unwrap();
    assert_eq!(locator.provider(), GeoProvider::Static);
    assert!(locator.locate("10.0.0.1").await.is_ok());

    let config = GeoConfig {
        provider: GeoProvider::IpInfo,
        token: Some("test-token".to_string()),
        ..GeoConfig::default()
    };
    let locator = create_geo_locator(&config).unwrap();
    assert_eq!(locator.provider(), GeoProvider::IpInfo);
}

#[tokio::test]
async fn test_ipinfo_rejects_non_ip_input() {
    // Unroutable base URL: a request would fail with an HTTP error instead
    let config = GeoConfig {
        provider: GeoProvider::IpInfo,
        api_base_url: "http://127.0.0.1:1".to_string(),
        timeout_seconds: 1,
        ..GeoConfig::default()
    };
    let locator = IpInfoGeoLocator::new(&config).unwrap();

    for input in ["../admin", "81.2.69.160/json?token=x", "unknown", ""] {
        let err = locator.locate(input).await.unwrap_err();
        assert!(err.starts_with("Invalid IP address"), "{}: {}", input, err);
    }
}
