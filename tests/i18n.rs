//! 언어 결정과 번역기 테스트. CLI 인자, 설정, 폴백 순서를 확인한다.
use envtest_cost_toolbox::i18n::{keys, resolve_language, Language, Translator};

#[test]
fn cli_language_wins_over_config() {
    assert_eq!(resolve_language("en", Some("ko")), "en");
    assert_eq!(resolve_language("ko-kr", Some("en")), "ko-kr");
}

#[test]
fn config_language_used_when_cli_is_auto() {
    assert_eq!(resolve_language("auto", Some("en-US")), "en-us");
    assert_eq!(resolve_language("auto", Some("ko")), "ko");
}

#[test]
fn regional_codes_normalize() {
    assert_eq!(resolve_language("EN-UK", Some("ko")), "en-us");
    assert_eq!(resolve_language("en-gb", Some("ko")), "en-us");
    assert_eq!(resolve_language("ko_KR", Some("en")), "ko");
}

#[test]
fn unknown_cli_code_falls_through_to_config() {
    assert_eq!(resolve_language("fr", Some("en")), "en");
}

#[test]
fn translator_korean_strings() {
    let tr = Translator::new("ko");
    assert_eq!(tr.language(), Language::Ko);
    assert_eq!(tr.t(keys::APP_EXIT), "프로그램을 종료합니다.");
    assert_eq!(tr.t(keys::ERROR_PREFIX), "오류");
}

#[test]
fn translator_english_strings() {
    let tr = Translator::new("en-us");
    assert_eq!(tr.language(), Language::En);
    assert_eq!(tr.t(keys::APP_EXIT), "Exiting application.");
    assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
}

#[test]
fn unknown_key_yields_placeholder() {
    let tr = Translator::new("en");
    assert_eq!(tr.t("no.such.key"), "[missing translation]");
}

#[test]
fn bundled_pack_matches_built_in_table() {
    // locales/ 팩이 로드되면 내장 테이블과 같은 문자열을 내야 한다
    let ko = Translator::new_with_pack("ko-kr", None);
    assert_eq!(ko.t(keys::APP_EXIT), "프로그램을 종료합니다.");
    let en = Translator::new_with_pack("en-us", None);
    assert_eq!(en.t(keys::APP_EXIT), "Exiting application.");
}

#[test]
fn method_labels_exist_in_both_languages() {
    use envtest_cost_toolbox::plan::MethodId;
    let ko = Translator::new("ko");
    let en = Translator::new("en");
    let methods = [
        MethodId::ColdA,
        MethodId::DryHeatB,
        MethodId::ThermalShockNa,
        MethodId::TemperatureChangeNb,
        MethodId::DampHeatCyclicDb,
        MethodId::TempHumidityCyclicZad,
        MethodId::DampHeatSteadyCab,
        MethodId::VibrationSinusoidalFc,
        MethodId::ShockEa,
        MethodId::VibrationBroadbandFh,
    ];
    for method in methods {
        assert_ne!(ko.t(method.label_key()), "[missing translation]", "{}", method.code());
        assert_ne!(en.t(method.label_key()), "[missing translation]", "{}", method.code());
    }
}
