//! 시험 준비 작업 비용. 고정된 6단계 절차 각각을 기술자 또는 설비가 수행하고,
//! 단가는 내부/외부 고객 구분에 따라 달라진다.

use crate::i18n::keys;

/// 외부 고객 기술자 단가 [EUR/h].
pub const TECHNICIAN_EXTERN_EUR_PER_H: f64 = 26.0;
/// 내부 고객 기술자 단가 [EUR/h].
pub const TECHNICIAN_INTERN_EUR_PER_H: f64 = 21.5;
/// 시험 1건당 운송비 [EUR].
pub const TRANSPORT_EUR_PER_TEST: f64 = 150.0;

/// 고객 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientType {
    Extern,
    Intern,
}

impl ClientType {
    pub const fn technician_eur_per_h(&self) -> f64 {
        match self {
            ClientType::Extern => TECHNICIAN_EXTERN_EUR_PER_H,
            ClientType::Intern => TECHNICIAN_INTERN_EUR_PER_H,
        }
    }

    pub const fn label_key(&self) -> &'static str {
        match self {
            ClientType::Extern => keys::CLIENT_EXTERN,
            ClientType::Intern => keys::CLIENT_INTERN,
        }
    }
}

/// 준비 작업 6단계. 순서대로 수행된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepStep {
    InspectionStart,
    Assembly,
    Programming,
    RealTest,
    Disassembly,
    InspectionEnd,
}

impl PrepStep {
    pub const ALL: [PrepStep; 6] = [
        PrepStep::InspectionStart,
        PrepStep::Assembly,
        PrepStep::Programming,
        PrepStep::RealTest,
        PrepStep::Disassembly,
        PrepStep::InspectionEnd,
    ];

    pub const fn label_key(&self) -> &'static str {
        match self {
            PrepStep::InspectionStart => keys::PREP_STEP_INSPECTION_START,
            PrepStep::Assembly => keys::PREP_STEP_ASSEMBLY,
            PrepStep::Programming => keys::PREP_STEP_PROGRAMMING,
            PrepStep::RealTest => keys::PREP_STEP_REAL_TEST,
            PrepStep::Disassembly => keys::PREP_STEP_DISASSEMBLY,
            PrepStep::InspectionEnd => keys::PREP_STEP_INSPECTION_END,
        }
    }
}

/// 설비 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineId {
    Bs350,
    Ts120Ctr,
    OldClim1000,
    ExcalClim1000,
    Clim512,
    Clim770,
    BiaChamber,
    Votsh,
    ExcalClim514,
    Vib40Kn,
    Vib30Kn,
}

/// 설비 단가 항목. 명칭은 설비 명판 표기를 그대로 쓴다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineRate {
    pub id: MachineId,
    pub name: &'static str,
    pub extern_eur_per_h: f64,
    pub intern_eur_per_h: f64,
}

impl MachineRate {
    pub const fn eur_per_h(&self, client: ClientType) -> f64 {
        match client {
            ClientType::Extern => self.extern_eur_per_h,
            ClientType::Intern => self.intern_eur_per_h,
        }
    }
}

const fn machine(
    id: MachineId,
    name: &'static str,
    extern_eur_per_h: f64,
    intern_eur_per_h: f64,
) -> MachineRate {
    MachineRate {
        id,
        name,
        extern_eur_per_h,
        intern_eur_per_h,
    }
}

/// 설비 단가 테이블.
pub const MACHINES: &[MachineRate] = &[
    machine(MachineId::Bs350, "BS chamber 350", 5.0, 3.0),
    machine(MachineId::Ts120Ctr, "Thermal shock chamber 120 CTR", 7.5, 5.5),
    machine(MachineId::OldClim1000, "Old climatic chamber 1000", 5.0, 3.0),
    machine(MachineId::ExcalClim1000, "Excal climatic chamber 1000", 5.0, 3.0),
    machine(MachineId::Clim512, "Climatic chamber 512", 5.0, 3.0),
    machine(MachineId::Clim770, "Climatic chamber 770", 7.5, 5.5),
    machine(MachineId::BiaChamber, "BIA chamber", 5.0, 3.0),
    machine(MachineId::Votsh, "Votsh", 5.0, 3.0),
    machine(MachineId::ExcalClim514, "Excal climatic chamber 514", 5.0, 3.0),
    machine(MachineId::Vib40Kn, "Vibration pot 40KN", 105.0, 45.0),
    machine(MachineId::Vib30Kn, "Vibration pot 30KN", 100.0, 40.0),
];

/// 설비 단가 항목을 찾는다. 테이블 순서는 `MachineId` 선언 순서와 같다.
pub fn machine_rate(id: MachineId) -> &'static MachineRate {
    &MACHINES[id as usize]
}

/// 작업 수행 주체.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Executor {
    Technician,
    Machine(MachineId),
}

/// 준비 작업 한 단계의 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrepTask {
    pub step: PrepStep,
    pub executor: Executor,
    pub duration_hours: f64,
}

/// 준비 작업 비용 입력. 표준 절차는 6단계를 모두 채운다.
#[derive(Debug, Clone)]
pub struct PrepCostInput {
    pub client: ClientType,
    /// 운송 서비스 포함 여부 (포함 시 시험 1건당 고정액 가산)
    pub include_transport: bool,
    pub tasks: Vec<PrepTask>,
}

/// 단계별 비용이 계산된 결과.
#[derive(Debug, Clone)]
pub struct PrepTaskCost {
    pub step: PrepStep,
    pub executor: Executor,
    pub duration_hours: f64,
    pub cost_eur: f64,
}

/// 준비 작업 비용 결과.
#[derive(Debug, Clone)]
pub struct PrepCostResult {
    pub tasks: Vec<PrepTaskCost>,
    /// 포함된 운송비 [EUR] (미포함이면 0)
    pub transport_eur: f64,
    pub total_eur: f64,
}

/// 준비 작업 비용 오류.
#[derive(Debug)]
pub enum PrepCostError {
    /// 단계 작업 시간이 0 이하이거나 유한하지 않음
    InvalidTaskHours { step: PrepStep, hours: f64 },
}

impl std::fmt::Display for PrepCostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrepCostError::InvalidTaskHours { step, hours } => {
                write!(f, "작업 단계 {step:?}의 시간이 올바르지 않습니다: {hours}시간")
            }
        }
    }
}

impl std::error::Error for PrepCostError {}

/// 준비 작업 전체 비용을 계산한다.
pub fn preparation_cost(input: &PrepCostInput) -> Result<PrepCostResult, PrepCostError> {
    let mut tasks = Vec::with_capacity(input.tasks.len());
    let mut total_eur = 0.0;
    for task in &input.tasks {
        if !task.duration_hours.is_finite() || task.duration_hours <= 0.0 {
            return Err(PrepCostError::InvalidTaskHours {
                step: task.step,
                hours: task.duration_hours,
            });
        }
        let rate = match task.executor {
            Executor::Technician => input.client.technician_eur_per_h(),
            Executor::Machine(id) => machine_rate(id).eur_per_h(input.client),
        };
        let cost_eur = rate * task.duration_hours;
        total_eur += cost_eur;
        tasks.push(PrepTaskCost {
            step: task.step,
            executor: task.executor,
            duration_hours: task.duration_hours,
            cost_eur,
        });
    }
    let transport_eur = if input.include_transport {
        TRANSPORT_EUR_PER_TEST
    } else {
        0.0
    };
    total_eur += transport_eur;
    Ok(PrepCostResult {
        tasks,
        transport_eur,
        total_eur,
    })
}
