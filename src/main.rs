use clap::Parser;

use envtest_cost_toolbox::{app, config, i18n};

/// 환경 시험 비용/영향 견적 CLI 인자.
#[derive(Parser, Debug)]
#[command(name = "envtest-cost", version, about = "환경 시험 비용·탄소 배출 견적 도구")]
struct Cli {
    /// 표시 언어 코드 (예: ko-kr, en-us, auto)
    #[arg(long, default_value = "auto")]
    lang: String,

    /// 번역 팩 TOML 디렉터리 경로
    #[arg(long)]
    lang_pack: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, cli.lang_pack.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
