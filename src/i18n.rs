use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ESTIMATE: &str = "main_menu.estimate";
    pub const MAIN_MENU_PREP_TASKS: &str = "main_menu.prep_tasks";
    pub const MAIN_MENU_PREDICTION: &str = "main_menu.prediction";
    pub const MAIN_MENU_RATES: &str = "main_menu.rates";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const TEST_TYPE_THERMAL: &str = "test_type.thermal";
    pub const TEST_TYPE_THERMAL_SHOCK: &str = "test_type.thermal_shock";
    pub const TEST_TYPE_VIBRATION: &str = "test_type.vibration";
    pub const TEST_TYPE_COMBINED: &str = "test_type.combined";

    pub const METHOD_COLD_A: &str = "method.cold_a";
    pub const METHOD_DRY_HEAT_B: &str = "method.dry_heat_b";
    pub const METHOD_THERMAL_SHOCK_NA: &str = "method.thermal_shock_na";
    pub const METHOD_TEMP_CHANGE_NB: &str = "method.temp_change_nb";
    pub const METHOD_DAMP_HEAT_DB: &str = "method.damp_heat_db";
    pub const METHOD_TEMP_HUMIDITY_ZAD: &str = "method.temp_humidity_zad";
    pub const METHOD_DAMP_HEAT_CAB: &str = "method.damp_heat_cab";
    pub const METHOD_VIBRATION_FC: &str = "method.vibration_fc";
    pub const METHOD_SHOCK_EA: &str = "method.shock_ea";
    pub const METHOD_BROADBAND_FH: &str = "method.broadband_fh";

    pub const EQUIPMENT_THERMAL_CHAMBER: &str = "equipment.thermal_chamber";
    pub const EQUIPMENT_THERMAL_SHOCK_CHAMBER: &str = "equipment.thermal_shock_chamber";
    pub const EQUIPMENT_VIBRATING_POT: &str = "equipment.vibrating_pot";
    pub const EQUIPMENT_COMBINED: &str = "equipment.combined";

    pub const ESTIMATE_HEADING: &str = "estimate.heading";
    pub const ESTIMATE_TEST_TYPE_OPTIONS: &str = "estimate.test_type_options";
    pub const ESTIMATE_STANDARD_OPTIONS: &str = "estimate.standard_options";
    pub const ESTIMATE_METHOD_HEADING: &str = "estimate.method_heading";
    pub const ESTIMATE_PART_THERMAL: &str = "estimate.part_thermal";
    pub const ESTIMATE_PART_VIBRATION: &str = "estimate.part_vibration";
    pub const PROMPT_EQUIPMENT: &str = "prompt.equipment";
    pub const PROMPT_LOW_TEMP: &str = "prompt.low_temp";
    pub const PROMPT_HIGH_TEMP: &str = "prompt.high_temp";
    pub const PROMPT_RATE_OF_CHANGE: &str = "prompt.rate_of_change";
    pub const PROMPT_HUMIDITY: &str = "prompt.humidity";
    pub const PROMPT_VARIANT: &str = "prompt.variant";
    pub const PROMPT_DURATION_HOURS: &str = "prompt.duration_hours";
    pub const PROMPT_DURATION_CYCLES: &str = "prompt.duration_cycles";
    pub const PROMPT_POWER_KW: &str = "prompt.power_kw";
    pub const PROMPT_AGE_FACTOR: &str = "prompt.age_factor";
    pub const PROMPT_MAINTENANCE_TOTAL: &str = "prompt.maintenance_total";
    pub const PROMPT_USE_PREP_TOTAL: &str = "prompt.use_prep_total";
    pub const PROMPT_RUN_PREDICTION: &str = "prompt.run_prediction";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_DURATION: &str = "result.duration";
    pub const RESULT_POWER: &str = "result.power";
    pub const RESULT_ENERGY: &str = "result.energy";
    pub const RESULT_ENERGY_COST: &str = "result.energy_cost";
    pub const RESULT_FIXED: &str = "result.fixed";
    pub const RESULT_ADDITIONAL: &str = "result.additional";
    pub const RESULT_TOTAL: &str = "result.total";
    pub const RESULT_CO2: &str = "result.co2";

    pub const PREP_HEADING: &str = "prep.heading";
    pub const PREP_CLIENT_OPTIONS: &str = "prep.client_options";
    pub const CLIENT_EXTERN: &str = "client.extern";
    pub const CLIENT_INTERN: &str = "client.intern";
    pub const PREP_STEP_INSPECTION_START: &str = "prep.step_inspection_start";
    pub const PREP_STEP_ASSEMBLY: &str = "prep.step_assembly";
    pub const PREP_STEP_PROGRAMMING: &str = "prep.step_programming";
    pub const PREP_STEP_REAL_TEST: &str = "prep.step_real_test";
    pub const PREP_STEP_DISASSEMBLY: &str = "prep.step_disassembly";
    pub const PREP_STEP_INSPECTION_END: &str = "prep.step_inspection_end";
    pub const PREP_EXECUTOR_OPTIONS: &str = "prep.executor_options";
    pub const PROMPT_TASK_HOURS: &str = "prep.task_hours";
    pub const PROMPT_MACHINE: &str = "prep.machine_select";
    pub const PREP_INCLUDE_TRANSPORT: &str = "prep.include_transport";
    pub const PREP_TRANSPORT_LINE: &str = "prep.transport_line";
    pub const PREP_TOTAL: &str = "prep.total";
    pub const PREP_CARRY_NOTE: &str = "prep.carry_note";

    pub const PREDICTION_HEADING: &str = "prediction.heading";
    pub const PROMPT_HISTORY_PATH: &str = "prediction.history_path";
    pub const PREDICTION_HISTORY_READ_FAILED: &str = "prediction.history_read_failed";
    pub const PROMPT_EQUIPMENT_AGE: &str = "prediction.equipment_age";
    pub const PREDICTION_TRUNCATED_NOTE: &str = "prediction.truncated_note";
    pub const PREDICTION_RESULT_HEADING: &str = "prediction.result_heading";
    pub const PREDICTION_COST: &str = "prediction.cost";
    pub const PREDICTION_FLUID: &str = "prediction.fluid";
    pub const PREDICTION_SCORE: &str = "prediction.score";
    pub const PREDICTION_ACTIONS: &str = "prediction.actions";
    pub const PREDICTION_FAILED_NOTE: &str = "prediction.failed_note";

    pub const RATES_HEADING: &str = "rates.heading";
    pub const RATES_POWER_HEADER: &str = "rates.power_header";
    pub const RATES_HOURLY_HEADER: &str = "rates.hourly_header";
    pub const RATES_LOCATION_HEADER: &str = "rates.location_header";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LOCATION: &str = "settings.current_location";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_AGE_FACTOR: &str = "settings.current_age_factor";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const PROMPT_LOCATION_NAME: &str = "settings.location_name";
    pub const PROMPT_LANGUAGE_CODE: &str = "settings.language_code";
    pub const PROMPT_AGE_DEFAULT: &str = "settings.age_default";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko-kr".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Environmental Test Cost Toolbox ===",
        MAIN_MENU_ESTIMATE => "1) 시험 비용 견적",
        MAIN_MENU_PREP_TASKS => "2) 준비 작업 비용",
        MAIN_MENU_PREDICTION => "3) 예지 보전 예측",
        MAIN_MENU_RATES => "4) 요율 테이블",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        TEST_TYPE_THERMAL => "열 시험",
        TEST_TYPE_THERMAL_SHOCK => "열충격 시험",
        TEST_TYPE_VIBRATION => "진동 시험",
        TEST_TYPE_COMBINED => "복합 시험",
        METHOD_COLD_A => "저온",
        METHOD_DRY_HEAT_B => "고온(건열)",
        METHOD_THERMAL_SHOCK_NA => "열충격",
        METHOD_TEMP_CHANGE_NB => "온도 변화",
        METHOD_DAMP_HEAT_DB => "고온고습 사이클",
        METHOD_TEMP_HUMIDITY_ZAD => "온습도 복합 사이클",
        METHOD_DAMP_HEAT_CAB => "고온고습 정상",
        METHOD_VIBRATION_FC => "정현파 진동",
        METHOD_SHOCK_EA => "충격",
        METHOD_BROADBAND_FH => "광대역 랜덤 진동",
        EQUIPMENT_THERMAL_CHAMBER => "온도 챔버",
        EQUIPMENT_THERMAL_SHOCK_CHAMBER => "열충격 챔버",
        EQUIPMENT_VIBRATING_POT => "진동 시험기",
        EQUIPMENT_COMBINED => "복합(진동+온도) 시험기",
        ESTIMATE_HEADING => "\n-- 시험 비용 견적 --",
        ESTIMATE_TEST_TYPE_OPTIONS => "1) 열 시험  2) 열충격  3) 진동  4) 복합",
        ESTIMATE_STANDARD_OPTIONS => "1) IEC 60068  2) 사용자 정의 규격",
        ESTIMATE_METHOD_HEADING => "시험 방법:",
        ESTIMATE_PART_THERMAL => "[열 파트]",
        ESTIMATE_PART_VIBRATION => "[진동 파트]",
        PROMPT_EQUIPMENT => "장비 선택: ",
        PROMPT_LOW_TEMP => "저온 [°C]: ",
        PROMPT_HIGH_TEMP => "고온 [°C]: ",
        PROMPT_RATE_OF_CHANGE => "온도 변화율 [°C/min]: ",
        PROMPT_HUMIDITY => "상대 습도 [%]: ",
        PROMPT_VARIANT => "변형 선택 (1 또는 2): ",
        PROMPT_DURATION_HOURS => "시험 시간 [h]: ",
        PROMPT_DURATION_CYCLES => "사이클 수 (1사이클=24h): ",
        PROMPT_POWER_KW => "소비 전력 [kW]: ",
        PROMPT_AGE_FACTOR => "장비 노화 계수 (1=할증 없음, 엔터=기본값): ",
        PROMPT_MAINTENANCE_TOTAL => "준비 작업 총액 [EUR] (없으면 0): ",
        PROMPT_USE_PREP_TOTAL => "저장된 준비 작업 총액을 고정비에 포함할까요? (y/n): ",
        PROMPT_RUN_PREDICTION => "예지 보전 예측도 실행할까요? (y/n): ",
        RESULT_HEADING => "\n-- 견적 결과 --",
        RESULT_DURATION => "시험 시간 [h]:",
        RESULT_POWER => "총 소비 전력 [kW]:",
        RESULT_ENERGY => "에너지 사용량 [kWh]:",
        RESULT_ENERGY_COST => "에너지 비용 [EUR]:",
        RESULT_FIXED => "고정비 합계 [EUR]:",
        RESULT_ADDITIONAL => "노화 할증 [EUR]:",
        RESULT_TOTAL => "총 비용 [EUR]:",
        RESULT_CO2 => "탄소 배출량 [kgCO2]:",
        PREP_HEADING => "\n-- 준비 작업 비용 --",
        PREP_CLIENT_OPTIONS => "1) 외부 고객  2) 내부 고객",
        CLIENT_EXTERN => "외부 고객",
        CLIENT_INTERN => "내부 고객",
        PREP_STEP_INSPECTION_START => "육안 점검 및 동작 확인 (시작)",
        PREP_STEP_ASSEMBLY => "조립 + 배선",
        PREP_STEP_PROGRAMMING => "프로그래밍 + 모의 시험",
        PREP_STEP_REAL_TEST => "본 시험",
        PREP_STEP_DISASSEMBLY => "분해 + 배선 제거",
        PREP_STEP_INSPECTION_END => "육안 점검 및 동작 확인 (종료)",
        PREP_EXECUTOR_OPTIONS => "1) 기술자  2) 설비",
        PROMPT_TASK_HOURS => "작업 시간 [h]: ",
        PROMPT_MACHINE => "설비 선택: ",
        PREP_INCLUDE_TRANSPORT => "운송비를 포함할까요? (y/n): ",
        PREP_TRANSPORT_LINE => "운송비 [EUR]:",
        PREP_TOTAL => "준비 작업 총액 [EUR]:",
        PREP_CARRY_NOTE => "총액을 저장했습니다. 다음 견적에서 고정비로 쓸 수 있습니다.",
        PREDICTION_HEADING => "\n-- 예지 보전 예측 --",
        PROMPT_HISTORY_PATH => "정비 이력 CSV 경로: ",
        PREDICTION_HISTORY_READ_FAILED => "이력 파일을 읽지 못했습니다:",
        PROMPT_EQUIPMENT_AGE => "장비 연식 [년]: ",
        PREDICTION_TRUNCATED_NOTE => "이력이 길어 앞부분만 전송합니다.",
        PREDICTION_RESULT_HEADING => "\n-- 예측 결과 --",
        PREDICTION_COST => "내년 예상 정비 비용 [EUR]:",
        PREDICTION_FLUID => "유체 교체 비용 [EUR]:",
        PREDICTION_SCORE => "신뢰성 점수 (0~100):",
        PREDICTION_ACTIONS => "권장 조치:",
        PREDICTION_FAILED_NOTE => "예측을 생성하지 못했습니다. 비용 견적은 그대로 유효합니다.",
        RATES_HEADING => "\n-- 요율 테이블 --",
        RATES_POWER_HEADER => "소비 전력 [kW] (방법 / 장비):",
        RATES_HOURLY_HEADER => "장비 가동 단가 [EUR/h]:",
        RATES_LOCATION_HEADER => "지역 요율 (EUR/kWh, kgCO2/kWh):",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LOCATION => "현재 지역:",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_CURRENT_AGE_FACTOR => "기본 노화 계수:",
        SETTINGS_OPTIONS => "1) 지역 변경  2) 언어 변경  3) 기본 노화 계수 변경",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        PROMPT_LOCATION_NAME => "지역명 (Tunisia/France/Germany): ",
        PROMPT_LANGUAGE_CODE => "언어 코드 (ko/en): ",
        PROMPT_AGE_DEFAULT => "기본 노화 계수: ",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Environmental Test Cost Toolbox ===",
        MAIN_MENU_ESTIMATE => "1) Test cost estimate",
        MAIN_MENU_PREP_TASKS => "2) Preparation task costs",
        MAIN_MENU_PREDICTION => "3) Predictive maintenance",
        MAIN_MENU_RATES => "4) Rate tables",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        TEST_TYPE_THERMAL => "Thermal test",
        TEST_TYPE_THERMAL_SHOCK => "Thermal shock test",
        TEST_TYPE_VIBRATION => "Vibration test",
        TEST_TYPE_COMBINED => "Combined test",
        METHOD_COLD_A => "Cold",
        METHOD_DRY_HEAT_B => "Dry heat",
        METHOD_THERMAL_SHOCK_NA => "Thermal shock",
        METHOD_TEMP_CHANGE_NB => "Change of temperature",
        METHOD_DAMP_HEAT_DB => "Damp heat cyclic",
        METHOD_TEMP_HUMIDITY_ZAD => "Temperature/humidity cyclic",
        METHOD_DAMP_HEAT_CAB => "Damp heat steady state",
        METHOD_VIBRATION_FC => "Vibration (sinusoidal)",
        METHOD_SHOCK_EA => "Shock",
        METHOD_BROADBAND_FH => "Vibration (broadband random)",
        EQUIPMENT_THERMAL_CHAMBER => "Thermal chamber",
        EQUIPMENT_THERMAL_SHOCK_CHAMBER => "Thermal shock chamber",
        EQUIPMENT_VIBRATING_POT => "Vibrating pot",
        EQUIPMENT_COMBINED => "Combined vibration/thermal rig",
        ESTIMATE_HEADING => "\n-- Test Cost Estimate --",
        ESTIMATE_TEST_TYPE_OPTIONS => "1) Thermal  2) Thermal shock  3) Vibration  4) Combined",
        ESTIMATE_STANDARD_OPTIONS => "1) IEC 60068  2) Custom standard",
        ESTIMATE_METHOD_HEADING => "Test method:",
        ESTIMATE_PART_THERMAL => "[Thermal part]",
        ESTIMATE_PART_VIBRATION => "[Vibration part]",
        PROMPT_EQUIPMENT => "Select equipment: ",
        PROMPT_LOW_TEMP => "Low temperature [°C]: ",
        PROMPT_HIGH_TEMP => "High temperature [°C]: ",
        PROMPT_RATE_OF_CHANGE => "Rate of change [°C/min]: ",
        PROMPT_HUMIDITY => "Relative humidity [%]: ",
        PROMPT_VARIANT => "Variant (1 or 2): ",
        PROMPT_DURATION_HOURS => "Test duration [h]: ",
        PROMPT_DURATION_CYCLES => "Cycle count (1 cycle = 24 h): ",
        PROMPT_POWER_KW => "Power draw [kW]: ",
        PROMPT_AGE_FACTOR => "Equipment age factor (1 = no markup, enter = default): ",
        PROMPT_MAINTENANCE_TOTAL => "Preparation task total [EUR] (0 if none): ",
        PROMPT_USE_PREP_TOTAL => "Include the saved preparation total in fixed costs? (y/n): ",
        PROMPT_RUN_PREDICTION => "Run the predictive maintenance advisory too? (y/n): ",
        RESULT_HEADING => "\n-- Estimate Result --",
        RESULT_DURATION => "Test duration [h]:",
        RESULT_POWER => "Total power draw [kW]:",
        RESULT_ENERGY => "Energy consumption [kWh]:",
        RESULT_ENERGY_COST => "Energy cost [EUR]:",
        RESULT_FIXED => "Total fixed costs [EUR]:",
        RESULT_ADDITIONAL => "Aging surcharge [EUR]:",
        RESULT_TOTAL => "Total cost [EUR]:",
        RESULT_CO2 => "Carbon footprint [kgCO2]:",
        PREP_HEADING => "\n-- Preparation Task Costs --",
        PREP_CLIENT_OPTIONS => "1) Extern client  2) Intern client",
        CLIENT_EXTERN => "Extern client",
        CLIENT_INTERN => "Intern client",
        PREP_STEP_INSPECTION_START => "Visual inspection and functioning check (start)",
        PREP_STEP_ASSEMBLY => "Assembly + wiring",
        PREP_STEP_PROGRAMMING => "Programming + simulated test",
        PREP_STEP_REAL_TEST => "Real test",
        PREP_STEP_DISASSEMBLY => "Disassembly + unwiring",
        PREP_STEP_INSPECTION_END => "Visual inspection and functioning check (end)",
        PREP_EXECUTOR_OPTIONS => "1) Technician  2) Machine",
        PROMPT_TASK_HOURS => "Task duration [h]: ",
        PROMPT_MACHINE => "Select machine: ",
        PREP_INCLUDE_TRANSPORT => "Include transport cost? (y/n): ",
        PREP_TRANSPORT_LINE => "Transport cost [EUR]:",
        PREP_TOTAL => "Preparation total [EUR]:",
        PREP_CARRY_NOTE => "Total saved. It can be used as fixed costs in the next estimate.",
        PREDICTION_HEADING => "\n-- Predictive Maintenance --",
        PROMPT_HISTORY_PATH => "Maintenance history CSV path: ",
        PREDICTION_HISTORY_READ_FAILED => "Could not read the history file:",
        PROMPT_EQUIPMENT_AGE => "Equipment age [years]: ",
        PREDICTION_TRUNCATED_NOTE => "History is long; only the leading part is sent.",
        PREDICTION_RESULT_HEADING => "\n-- Prediction Result --",
        PREDICTION_COST => "Predicted maintenance cost next year [EUR]:",
        PREDICTION_FLUID => "Fluid replacement cost [EUR]:",
        PREDICTION_SCORE => "Reliability score (0-100):",
        PREDICTION_ACTIONS => "Suggested actions:",
        PREDICTION_FAILED_NOTE => "Prediction unavailable. The cost estimate above remains valid.",
        RATES_HEADING => "\n-- Rate Tables --",
        RATES_POWER_HEADER => "Power draw [kW] (method / equipment):",
        RATES_HOURLY_HEADER => "Equipment hourly cost [EUR/h]:",
        RATES_LOCATION_HEADER => "Location rates (EUR/kWh, kgCO2/kWh):",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LOCATION => "Current location:",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_CURRENT_AGE_FACTOR => "Default age factor:",
        SETTINGS_OPTIONS => "1) Change location  2) Change language  3) Change default age factor",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        PROMPT_LOCATION_NAME => "Location name (Tunisia/France/Germany): ",
        PROMPT_LANGUAGE_CODE => "Language code (ko/en): ",
        PROMPT_AGE_DEFAULT => "Default age factor: ",
        _ => return None,
    })
}
