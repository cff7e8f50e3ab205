//! 준비 작업 비용 테스트. 고객 구분별 단가, 설비 단가 테이블, 운송비 포함 여부를 확인한다.
use envtest_cost_toolbox::cost::{
    machine_rate, preparation_cost, ClientType, Executor, MachineId, PrepCostError, PrepCostInput,
    PrepStep, PrepTask, MACHINES, TRANSPORT_EUR_PER_TEST,
};

fn technician_tasks(duration_hours: f64) -> Vec<PrepTask> {
    PrepStep::ALL
        .iter()
        .map(|step| PrepTask {
            step: *step,
            executor: Executor::Technician,
            duration_hours,
        })
        .collect()
}

#[test]
fn six_technician_hours_extern_with_transport() {
    // 6단계 x 1h x 26 EUR/h = 156; 운송비 150 포함 = 306
    let result = preparation_cost(&PrepCostInput {
        client: ClientType::Extern,
        include_transport: true,
        tasks: technician_tasks(1.0),
    })
    .expect("prep cost");
    assert_eq!(result.tasks.len(), 6);
    assert!((result.transport_eur - TRANSPORT_EUR_PER_TEST).abs() < 1e-12);
    assert!((result.total_eur - 306.0).abs() < 1e-9);
}

#[test]
fn intern_client_pays_reduced_technician_rate() {
    // 6단계 x 1h x 21.5 EUR/h = 129, 운송비 없음
    let result = preparation_cost(&PrepCostInput {
        client: ClientType::Intern,
        include_transport: false,
        tasks: technician_tasks(1.0),
    })
    .expect("prep cost");
    assert_eq!(result.transport_eur, 0.0);
    assert!((result.total_eur - 129.0).abs() < 1e-9);
}

#[test]
fn machine_executor_uses_machine_table_rate() {
    let result = preparation_cost(&PrepCostInput {
        client: ClientType::Extern,
        include_transport: false,
        tasks: vec![PrepTask {
            step: PrepStep::RealTest,
            executor: Executor::Machine(MachineId::Vib40Kn),
            duration_hours: 2.0,
        }],
    })
    .expect("prep cost");
    // 40KN 진동 시험기 외부 단가 105 EUR/h
    assert!((result.tasks[0].cost_eur - 210.0).abs() < 1e-9);
    assert!((result.total_eur - 210.0).abs() < 1e-9);
}

#[test]
fn machine_rates_differ_by_client() {
    let rate = machine_rate(MachineId::Vib30Kn);
    assert_eq!(rate.eur_per_h(ClientType::Extern), 100.0);
    assert_eq!(rate.eur_per_h(ClientType::Intern), 40.0);
}

#[test]
fn mixed_executors_sum_per_task() {
    // 기술자 1h(26) + 열충격 챔버 3h(7.5x3 = 22.5) + 운송 150 = 198.5
    let result = preparation_cost(&PrepCostInput {
        client: ClientType::Extern,
        include_transport: true,
        tasks: vec![
            PrepTask {
                step: PrepStep::Assembly,
                executor: Executor::Technician,
                duration_hours: 1.0,
            },
            PrepTask {
                step: PrepStep::RealTest,
                executor: Executor::Machine(MachineId::Ts120Ctr),
                duration_hours: 3.0,
            },
        ],
    })
    .expect("prep cost");
    assert!((result.tasks[0].cost_eur - 26.0).abs() < 1e-9);
    assert!((result.tasks[1].cost_eur - 22.5).abs() < 1e-9);
    assert!((result.total_eur - 198.5).abs() < 1e-9);
}

#[test]
fn zero_hours_rejected() {
    let err = preparation_cost(&PrepCostInput {
        client: ClientType::Extern,
        include_transport: false,
        tasks: vec![PrepTask {
            step: PrepStep::Programming,
            executor: Executor::Technician,
            duration_hours: 0.0,
        }],
    })
    .expect_err("zero hours");
    assert!(matches!(
        err,
        PrepCostError::InvalidTaskHours {
            step: PrepStep::Programming,
            ..
        }
    ));
}

#[test]
fn non_finite_hours_rejected() {
    let err = preparation_cost(&PrepCostInput {
        client: ClientType::Intern,
        include_transport: false,
        tasks: vec![PrepTask {
            step: PrepStep::Disassembly,
            executor: Executor::Technician,
            duration_hours: f64::INFINITY,
        }],
    })
    .expect_err("infinite hours");
    assert!(matches!(err, PrepCostError::InvalidTaskHours { .. }));
}

#[test]
fn machine_table_order_matches_ids() {
    // machine_rate가 인덱스 접근으로 조회하므로 선언 순서가 곧 계약이다
    for (i, machine) in MACHINES.iter().enumerate() {
        assert_eq!(machine.id as usize, i, "{}", machine.name);
        assert_eq!(machine_rate(machine.id), machine);
    }
}
