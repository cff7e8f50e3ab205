use std::fs;
use std::io::{self, Write};

use crate::app::{AppError, SessionState};
use crate::config::Config;
use crate::cost::{
    estimate_test_cost, preparation_cost, ClientType, Executor, PrepCostInput, PrepStep, PrepTask,
    Pricing, MACHINES,
};
use crate::i18n::{keys, Translator};
use crate::maintenance::{predictor_from_config, truncate_history, PredictionRequest};
use crate::plan::{
    Equipment, MethodId, TestKind, TestPlan, ThermalMethod, ThermalShockMethod, VibrationMethod,
};
use crate::rate_db::equipment_hourly_cost_eur;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Estimate,
    PrepTasks,
    Prediction,
    Rates,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ESTIMATE));
    println!("{}", tr.t(keys::MAIN_MENU_PREP_TASKS));
    println!("{}", tr.t(keys::MAIN_MENU_PREDICTION));
    println!("{}", tr.t(keys::MAIN_MENU_RATES));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Estimate),
            "2" => return Ok(MenuChoice::PrepTasks),
            "3" => return Ok(MenuChoice::Prediction),
            "4" => return Ok(MenuChoice::Rates),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 견적 마법사를 처리한다. 내역을 먼저 출력하고 나서 예측을 제안한다.
pub fn handle_estimate(
    tr: &Translator,
    cfg: &Config,
    session: &mut SessionState,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ESTIMATE_HEADING));
    let kind = select_test_kind(tr)?;
    let custom = select_custom_standard(tr)?;

    let plan = if custom {
        build_custom_plan(tr, kind)?
    } else {
        build_iec_plan(tr, kind)?
    };

    let age_factor = read_f64_or(tr, tr.t(keys::PROMPT_AGE_FACTOR), cfg.estimate.age_factor)?;
    let maintenance_total = ask_maintenance_total(tr, session)?;

    let pricing = Pricing {
        location: cfg.location.name.clone(),
        rh_eur: cfg.estimate.rh_eur,
        transport_eur: cfg.estimate.transport_eur,
        age_factor,
        maintenance_tasks_total_eur: maintenance_total,
    };
    let rates = cfg.rate_table();
    let estimate = estimate_test_cost(&plan, &pricing, &rates)?;

    println!("{}", tr.t(keys::RESULT_HEADING));
    println!("{} {:.1}", tr.t(keys::RESULT_DURATION), estimate.duration_hours);
    println!("{} {:.2}", tr.t(keys::RESULT_POWER), estimate.total_power_kw);
    let b = &estimate.breakdown;
    println!("{} {:.3}", tr.t(keys::RESULT_ENERGY), b.energy_consumption_kwh);
    println!("{} {:.2}", tr.t(keys::RESULT_ENERGY_COST), b.energy_cost_eur);
    println!("{} {:.2}", tr.t(keys::RESULT_FIXED), b.total_fixed_costs_eur);
    println!("{} {:.2}", tr.t(keys::RESULT_ADDITIONAL), b.additional_cost_eur);
    println!("{} {:.2}", tr.t(keys::RESULT_TOTAL), b.total_cost_eur);
    println!("{} {:.3}", tr.t(keys::RESULT_CO2), b.carbon_footprint_kg_co2);

    // 예측 실패가 위 내역을 무효화하지 않도록 여기서 연성 처리한다.
    if read_yes_no(tr.t(keys::PROMPT_RUN_PREDICTION))? {
        handle_prediction(tr, cfg, Some(plan.equipment()))?;
    }
    Ok(())
}

fn select_test_kind(tr: &Translator) -> Result<TestKind, AppError> {
    println!("{}", tr.t(keys::ESTIMATE_TEST_TYPE_OPTIONS));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => return Ok(TestKind::Thermal),
            "2" => return Ok(TestKind::ThermalShock),
            "3" => return Ok(TestKind::Vibration),
            "4" => return Ok(TestKind::Combined),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn select_custom_standard(tr: &Translator) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::ESTIMATE_STANDARD_OPTIONS));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => return Ok(false),
            "2" => return Ok(true),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn build_iec_plan(tr: &Translator, kind: TestKind) -> Result<TestPlan, AppError> {
    match kind {
        TestKind::Thermal => {
            let method = select_thermal_method(tr)?;
            let equipment = select_equipment(
                tr,
                &[Equipment::ThermalChamber, Equipment::CombinedVibrationThermal],
            )?;
            Ok(TestPlan::Thermal { method, equipment })
        }
        TestKind::ThermalShock => {
            let low_temp_c = read_f64(tr, tr.t(keys::PROMPT_LOW_TEMP))?;
            let high_temp_c = read_f64(tr, tr.t(keys::PROMPT_HIGH_TEMP))?;
            let duration_hours = read_f64(tr, tr.t(keys::PROMPT_DURATION_HOURS))?;
            let equipment = select_equipment(tr, &[Equipment::ThermalShockChamber])?;
            Ok(TestPlan::ThermalShock {
                method: ThermalShockMethod::ShockNa {
                    low_temp_c,
                    high_temp_c,
                    duration_hours,
                },
                equipment,
            })
        }
        TestKind::Vibration => {
            let method = select_vibration_method(tr)?;
            let equipment = select_equipment(
                tr,
                &[Equipment::VibratingPot, Equipment::CombinedVibrationThermal],
            )?;
            Ok(TestPlan::Vibration { method, equipment })
        }
        TestKind::Combined => {
            println!("{}", tr.t(keys::ESTIMATE_PART_THERMAL));
            let thermal = select_thermal_method(tr)?;
            println!("{}", tr.t(keys::ESTIMATE_PART_VIBRATION));
            let vibration = select_vibration_method(tr)?;
            Ok(TestPlan::Combined { thermal, vibration })
        }
    }
}

fn build_custom_plan(tr: &Translator, kind: TestKind) -> Result<TestPlan, AppError> {
    match kind {
        TestKind::Combined => {
            println!("{}", tr.t(keys::ESTIMATE_PART_THERMAL));
            let thermal_duration_hours = read_f64(tr, tr.t(keys::PROMPT_DURATION_HOURS))?;
            let thermal_power_kw = read_f64(tr, tr.t(keys::PROMPT_POWER_KW))?;
            println!("{}", tr.t(keys::ESTIMATE_PART_VIBRATION));
            let vibration_duration_hours = read_f64(tr, tr.t(keys::PROMPT_DURATION_HOURS))?;
            let vibration_power_kw = read_f64(tr, tr.t(keys::PROMPT_POWER_KW))?;
            Ok(TestPlan::CustomCombined {
                thermal_duration_hours,
                thermal_power_kw,
                vibration_duration_hours,
                vibration_power_kw,
            })
        }
        TestKind::Thermal | TestKind::ThermalShock | TestKind::Vibration => {
            let options: &[Equipment] = match kind {
                TestKind::Thermal => {
                    &[Equipment::ThermalChamber, Equipment::CombinedVibrationThermal]
                }
                TestKind::ThermalShock => &[Equipment::ThermalShockChamber],
                _ => &[Equipment::VibratingPot, Equipment::CombinedVibrationThermal],
            };
            let equipment = select_equipment(tr, options)?;
            let duration_hours = read_f64(tr, tr.t(keys::PROMPT_DURATION_HOURS))?;
            let power_kw = read_f64(tr, tr.t(keys::PROMPT_POWER_KW))?;
            Ok(TestPlan::CustomSingle {
                equipment,
                duration_hours,
                power_kw,
            })
        }
    }
}

const THERMAL_METHOD_IDS: [MethodId; 6] = [
    MethodId::ColdA,
    MethodId::DryHeatB,
    MethodId::TemperatureChangeNb,
    MethodId::DampHeatCyclicDb,
    MethodId::TempHumidityCyclicZad,
    MethodId::DampHeatSteadyCab,
];

fn select_thermal_method(tr: &Translator) -> Result<ThermalMethod, AppError> {
    println!("{}", tr.t(keys::ESTIMATE_METHOD_HEADING));
    for (i, id) in THERMAL_METHOD_IDS.iter().enumerate() {
        println!("{}) {} ({})", i + 1, tr.t(id.label_key()), id.code());
    }
    let id = loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if (1..=THERMAL_METHOD_IDS.len()).contains(&n) {
                break THERMAL_METHOD_IDS[n - 1];
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    let method = match id {
        MethodId::ColdA => ThermalMethod::ColdA {
            low_temp_c: read_f64(tr, tr.t(keys::PROMPT_LOW_TEMP))?,
            duration_hours: read_f64(tr, tr.t(keys::PROMPT_DURATION_HOURS))?,
        },
        MethodId::DryHeatB => ThermalMethod::DryHeatB {
            high_temp_c: read_f64(tr, tr.t(keys::PROMPT_HIGH_TEMP))?,
            duration_hours: read_f64(tr, tr.t(keys::PROMPT_DURATION_HOURS))?,
        },
        MethodId::TemperatureChangeNb => ThermalMethod::TemperatureChangeNb {
            low_temp_c: read_f64(tr, tr.t(keys::PROMPT_LOW_TEMP))?,
            high_temp_c: read_f64(tr, tr.t(keys::PROMPT_HIGH_TEMP))?,
            rate_c_per_min: read_f64(tr, tr.t(keys::PROMPT_RATE_OF_CHANGE))?,
            duration_hours: read_f64(tr, tr.t(keys::PROMPT_DURATION_HOURS))?,
        },
        MethodId::DampHeatCyclicDb => ThermalMethod::DampHeatCyclicDb {
            high_temp_c: read_f64(tr, tr.t(keys::PROMPT_HIGH_TEMP))?,
            variant: read_u32(tr, tr.t(keys::PROMPT_VARIANT))? as u8,
            duration_cycles: read_u32(tr, tr.t(keys::PROMPT_DURATION_CYCLES))?,
        },
        MethodId::TempHumidityCyclicZad => ThermalMethod::TempHumidityCyclicZad {
            duration_cycles: read_u32(tr, tr.t(keys::PROMPT_DURATION_CYCLES))?,
        },
        _ => ThermalMethod::DampHeatSteadyCab {
            high_temp_c: read_f64(tr, tr.t(keys::PROMPT_HIGH_TEMP))?,
            humidity_pct: read_f64(tr, tr.t(keys::PROMPT_HUMIDITY))?,
            duration_hours: read_f64(tr, tr.t(keys::PROMPT_DURATION_HOURS))?,
        },
    };
    Ok(method)
}

const VIBRATION_METHOD_IDS: [MethodId; 3] = [
    MethodId::VibrationSinusoidalFc,
    MethodId::ShockEa,
    MethodId::VibrationBroadbandFh,
];

fn select_vibration_method(tr: &Translator) -> Result<VibrationMethod, AppError> {
    println!("{}", tr.t(keys::ESTIMATE_METHOD_HEADING));
    for (i, id) in VIBRATION_METHOD_IDS.iter().enumerate() {
        println!("{}) {} ({})", i + 1, tr.t(id.label_key()), id.code());
    }
    let id = loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if (1..=VIBRATION_METHOD_IDS.len()).contains(&n) {
                break VIBRATION_METHOD_IDS[n - 1];
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    let duration_hours = read_f64(tr, tr.t(keys::PROMPT_DURATION_HOURS))?;
    let method = match id {
        MethodId::VibrationSinusoidalFc => VibrationMethod::SinusoidalFc { duration_hours },
        MethodId::ShockEa => VibrationMethod::ShockEa { duration_hours },
        _ => VibrationMethod::BroadbandRandomFh { duration_hours },
    };
    Ok(method)
}

fn select_equipment(tr: &Translator, options: &[Equipment]) -> Result<Equipment, AppError> {
    if options.len() == 1 {
        println!(
            "{}{}",
            tr.t(keys::PROMPT_EQUIPMENT),
            tr.t(options[0].label_key())
        );
        return Ok(options[0]);
    }
    for (i, equipment) in options.iter().enumerate() {
        println!("{}) {}", i + 1, tr.t(equipment.label_key()));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_EQUIPMENT))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if (1..=options.len()).contains(&n) {
                return Ok(options[n - 1]);
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

/// 준비 작업 총액을 결정한다. 저장된 총액이 있으면 먼저 제안한다.
fn ask_maintenance_total(
    tr: &Translator,
    session: &mut SessionState,
) -> Result<Option<f64>, AppError> {
    if let Some(total) = session.last_prep_total_eur {
        println!("{} {:.2}", tr.t(keys::PREP_TOTAL), total);
        if read_yes_no(tr.t(keys::PROMPT_USE_PREP_TOTAL))? {
            return Ok(Some(total));
        }
    }
    let value = read_f64(tr, tr.t(keys::PROMPT_MAINTENANCE_TOTAL))?;
    if value > 0.0 {
        Ok(Some(value))
    } else {
        Ok(None)
    }
}

/// 준비 작업 비용 메뉴를 처리한다.
pub fn handle_prep_tasks(tr: &Translator, session: &mut SessionState) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PREP_HEADING));
    println!("{}", tr.t(keys::PREP_CLIENT_OPTIONS));
    let client = loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => break ClientType::Extern,
            "2" => break ClientType::Intern,
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    let include_transport = read_yes_no(tr.t(keys::PREP_INCLUDE_TRANSPORT))?;

    let mut tasks = Vec::with_capacity(PrepStep::ALL.len());
    for (i, step) in PrepStep::ALL.iter().enumerate() {
        println!("\n{}. {}", i + 1, tr.t(step.label_key()));
        let duration_hours = read_f64(tr, tr.t(keys::PROMPT_TASK_HOURS))?;
        let executor = select_executor(tr)?;
        tasks.push(PrepTask {
            step: *step,
            executor,
            duration_hours,
        });
    }

    let result = preparation_cost(&PrepCostInput {
        client,
        include_transport,
        tasks,
    })?;
    for task in &result.tasks {
        println!("  {}: {:.2} EUR", tr.t(task.step.label_key()), task.cost_eur);
    }
    if result.transport_eur > 0.0 {
        println!("{} {:.2}", tr.t(keys::PREP_TRANSPORT_LINE), result.transport_eur);
    }
    println!("{} {:.2}", tr.t(keys::PREP_TOTAL), result.total_eur);

    session.last_prep_total_eur = Some(result.total_eur);
    println!("{}", tr.t(keys::PREP_CARRY_NOTE));
    Ok(())
}

fn select_executor(tr: &Translator) -> Result<Executor, AppError> {
    println!("{}", tr.t(keys::PREP_EXECUTOR_OPTIONS));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => return Ok(Executor::Technician),
            "2" => {
                for (i, machine) in MACHINES.iter().enumerate() {
                    println!("{}) {}", i + 1, machine.name);
                }
                loop {
                    let pick = read_line(tr.t(keys::PROMPT_MACHINE))?;
                    if let Ok(n) = pick.trim().parse::<usize>() {
                        if (1..=MACHINES.len()).contains(&n) {
                            return Ok(Executor::Machine(MACHINES[n - 1].id));
                        }
                    }
                    println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                }
            }
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 예지 보전 예측 메뉴를 처리한다.
///
/// 예측 실패는 안내문만 출력하고 정상 반환한다. 견적 흐름에서 호출될 때
/// 이미 출력된 비용 내역을 건드리지 않기 위함이다.
pub fn handle_prediction(
    tr: &Translator,
    cfg: &Config,
    equipment: Option<Equipment>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PREDICTION_HEADING));
    let path = read_line(tr.t(keys::PROMPT_HISTORY_PATH))?;
    let history = match fs::read_to_string(path.trim()) {
        Ok(content) => content,
        Err(err) => {
            println!("{} {err}", tr.t(keys::PREDICTION_HISTORY_READ_FAILED));
            return Ok(());
        }
    };
    let equipment = match equipment {
        Some(equipment) => equipment,
        None => select_equipment(tr, &Equipment::ALL)?,
    };
    let equipment_age_years = read_f64(tr, tr.t(keys::PROMPT_EQUIPMENT_AGE))?;

    let max_chars = cfg.prediction.max_history_chars;
    if history.chars().count() > max_chars {
        println!("{}", tr.t(keys::PREDICTION_TRUNCATED_NOTE));
    }
    let request = PredictionRequest {
        historical_csv_content: truncate_history(&history, max_chars),
        equipment_age_years,
        equipment_type: equipment.as_str().to_string(),
    };

    let outcome =
        predictor_from_config(&cfg.prediction).and_then(|predictor| predictor.predict(&request));
    match outcome {
        Ok(prediction) => {
            println!("{}", tr.t(keys::PREDICTION_RESULT_HEADING));
            println!(
                "{} {:.2}",
                tr.t(keys::PREDICTION_COST),
                prediction.predicted_maintenance_cost
            );
            println!(
                "{} {:.2}",
                tr.t(keys::PREDICTION_FLUID),
                prediction.fluid_replacement_cost
            );
            println!(
                "{} {:.1}",
                tr.t(keys::PREDICTION_SCORE),
                prediction.reliability_score
            );
            println!(
                "{} {}",
                tr.t(keys::PREDICTION_ACTIONS),
                prediction.suggested_maintenance_actions
            );
        }
        Err(err) => {
            println!("{} ({err})", tr.t(keys::PREDICTION_FAILED_NOTE));
        }
    }
    Ok(())
}

/// 요율 테이블 메뉴를 처리한다.
pub fn handle_rates(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RATES_HEADING));
    let rates = cfg.rate_table();

    println!("{}", tr.t(keys::RATES_POWER_HEADER));
    for entry in rates.power_entries() {
        println!(
            "  {} / {}: {} kW",
            entry.method.code(),
            tr.t(entry.equipment.label_key()),
            entry.power_kw
        );
    }

    println!("{}", tr.t(keys::RATES_HOURLY_HEADER));
    for equipment in Equipment::ALL {
        println!(
            "  {}: {} EUR/h",
            tr.t(equipment.label_key()),
            equipment_hourly_cost_eur(equipment)
        );
    }

    println!("{}", tr.t(keys::RATES_LOCATION_HEADER));
    for location in rates.location_rates() {
        println!(
            "  {}: {} EUR/kWh, {} kgCO2/kWh",
            location.name, location.electricity_eur_per_kwh, location.emission_kg_co2_per_kwh
        );
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LOCATION), cfg.location.name);
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language.as_deref().unwrap_or("auto")
    );
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_AGE_FACTOR),
        cfg.estimate.age_factor
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => {
            let name = read_line(tr.t(keys::PROMPT_LOCATION_NAME))?;
            if !name.trim().is_empty() {
                cfg.location.name = name.trim().to_string();
            }
        }
        "2" => {
            let code = read_line(tr.t(keys::PROMPT_LANGUAGE_CODE))?;
            if !code.trim().is_empty() {
                cfg.language = Some(code.trim().to_string());
            }
        }
        "3" => {
            cfg.estimate.age_factor = read_f64(tr, tr.t(keys::PROMPT_AGE_DEFAULT))?;
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 기본값을 쓰는 숫자 프롬프트.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        if s.trim().is_empty() {
            return Ok(default);
        }
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32(tr: &Translator, prompt: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_yes_no(prompt: &str) -> Result<bool, AppError> {
    let s = read_line(prompt)?;
    Ok(matches!(s.trim(), "y" | "Y"))
}
