extern crate chinacoord;

use chinacoord::*;

const SHANGHAI: (f64, f64) = (121.473701, 31.230416);

#[test]
fn convert_matches_typed_functions() {
    let (lng, lat) = SHANGHAI;
    let wgs = Wgs84Point::new(lng, lat);
    let gcj = wgs84_to_gcj02(wgs);
    let bd = gcj02_to_bd09(gcj);

    assert_eq!(convert(lng, lat, CoordSystem::Wgs84, CoordSystem::Gcj02), gcj.into_lng_lat());
    assert_eq!(convert(lng, lat, CoordSystem::Wgs84, CoordSystem::Bd09), bd.into_lng_lat());

    let (gcj_lng, gcj_lat) = gcj.into_lng_lat();
    assert_eq!(convert(gcj_lng, gcj_lat, CoordSystem::Gcj02, CoordSystem::Wgs84), gcj02_to_wgs84(gcj).into_lng_lat());
    assert_eq!(convert(gcj_lng, gcj_lat, CoordSystem::Gcj02, CoordSystem::Bd09), bd.into_lng_lat());

    let (bd_lng, bd_lat) = bd.into_lng_lat();
    assert_eq!(convert(bd_lng, bd_lat, CoordSystem::Bd09, CoordSystem::Gcj02), bd09_to_gcj02(bd).into_lng_lat());
    assert_eq!(convert(bd_lng, bd_lat, CoordSystem::Bd09, CoordSystem::Wgs84), bd09_to_wgs84(bd).into_lng_lat());
}

#[test]
fn convert_into_same_system_is_identity() {
    for &system in &CoordSystem::ALL {
        assert_eq!(convert(SHANGHAI.0, SHANGHAI.1, system, system), SHANGHAI);
    }
}

#[test]
fn typed_transform() {
    let wgs = Wgs84Point::new(SHANGHAI.0, SHANGHAI.1);

    assert_eq!(wgs.transform::<Gcj02>(), wgs84_to_gcj02(wgs));
    assert_eq!(wgs.transform::<Bd09>(), wgs84_to_bd09(wgs));
    assert_eq!(wgs.transform::<Wgs84>(), wgs);

    let bd: Bd09Point = wgs.transform();
    assert_eq!(bd.transform::<Wgs84>(), bd09_to_wgs84(bd));
}

#[test]
fn composed_transforms_chain_through_gcj02() {
    let wgs = Wgs84Point::new(SHANGHAI.0, SHANGHAI.1);
    assert_eq!(wgs84_to_bd09(wgs), gcj02_to_bd09(wgs84_to_gcj02(wgs)));

    let bd = Bd09Point::new(121.48478, 31.23433);
    assert_eq!(bd09_to_wgs84(bd), gcj02_to_wgs84(bd09_to_gcj02(bd)));
}

#[test]
fn parse_system() {
    assert_eq!("wgs84".parse::<CoordSystem>().unwrap(), CoordSystem::Wgs84);
    assert_eq!("WGS-84".parse::<CoordSystem>().unwrap(), CoordSystem::Wgs84);
    assert_eq!("gps".parse::<CoordSystem>().unwrap(), CoordSystem::Wgs84);
    assert_eq!("GCJ02".parse::<CoordSystem>().unwrap(), CoordSystem::Gcj02);
    assert_eq!("amap".parse::<CoordSystem>().unwrap(), CoordSystem::Gcj02);
    assert_eq!(" baidu ".parse::<CoordSystem>().unwrap(), CoordSystem::Bd09);
    assert_eq!("bd-09".parse::<CoordSystem>().unwrap(), CoordSystem::Bd09);

    assert_eq!(
        "utm".parse::<CoordSystem>(),
        Err(ParseError::UnknownSystem("utm".to_string())),
    );
}

#[test]
fn display_system() {
    assert_eq!(CoordSystem::Wgs84.to_string(), "WGS-84");
    assert_eq!(CoordSystem::Gcj02.to_string(), "GCJ-02");
    assert_eq!(CoordSystem::Bd09.to_string(), "BD-09");
}

#[test]
fn parse_point() {
    let point: Gcj02Point = "116.481488,39.990464".parse().unwrap();
    assert_eq!(point.into_lng_lat(), (116.481488, 39.990464));

    let point: Bd09Point = " 121.5 , 31.2 ".parse().unwrap();
    assert_eq!(point.into_lng_lat(), (121.5, 31.2));

    assert_eq!("116.48".parse::<Wgs84Point>(), Err(ParseError::MissingComponent));
    assert_eq!("".parse::<Wgs84Point>(), Err(ParseError::MissingComponent));
    assert_eq!("116.48,".parse::<Wgs84Point>(), Err(ParseError::MissingComponent));
    assert_eq!("1,2,3".parse::<Wgs84Point>(), Err(ParseError::TooManyComponents));
    assert_eq!("east,39.9".parse::<Wgs84Point>(), Err(ParseError::InvalidNumber("east".to_string())));
}

#[test]
fn display_point() {
    let point = Gcj02Point::new(116.481488, 39.990464);
    assert_eq!(point.to_string(), "116.481488,39.990464");
    assert_eq!(point.to_string().parse::<Gcj02Point>().unwrap(), point);
}

#[test]
fn error_messages() {
    assert_eq!(
        ParseError::UnknownSystem("utm".to_string()).to_string(),
        "unknown coordinate system: \"utm\"",
    );
    assert_eq!(ParseError::InvalidNumber("x".to_string()).to_string(), "invalid number: \"x\"");
}

#[test]
fn parse_untagged_pair() {
    assert_eq!(point::parse_lng_lat("104.22086,31.0048"), Ok((104.22086, 31.0048)));
    assert_eq!(point::parse_lng_lat("104.22086;31.0048"), Err(ParseError::InvalidNumber("104.22086;31.0048".to_string())));
}
