//! quiz-runner: headless cooldown quiz over a local game-data mirror.
//!
//! Usage:
//!   quiz-runner --seed 12345 --questions 5 --data-dir ./data
//!   quiz-runner --seed 12345 --ipc-mode

use anyhow::Result;
use cooldown_quiz_core::{
    config::QuizConfig,
    rng::{QuizRng, RngBank, RngSlot},
    session::{
        draw_question, ActiveQuestion, PhaseAnswers, PhaseOutcome, QuizPhase, QuizSession,
        Scoreboard,
    },
    source::{AssetUrls, ChampionSource, DataDirSource},
    types::{Rank, Seconds},
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    NextQuestion,
    Answer {
        phase: u8,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        value: Option<Seconds>,
    },
    Quit,
}

/// What the UI may see. A phase's options appear once the phase before it
/// is answered; answer keys only once their own phase is.
#[derive(serde::Serialize)]
struct UiState {
    phase:            QuizPhase,
    champion:         Option<String>,
    champion_icon:    Option<String>,
    spell:            Option<String>,
    spell_icon:       Option<String>,
    keybind:          Option<char>,
    asked_rank:       Option<Rank>,
    max_rank:         Option<Rank>,
    range_labels:     Vec<String>,
    exact_options:    Vec<Seconds>,
    max_rank_options: Vec<Seconds>,
    answers:          PhaseAnswers,
    correct:          [Option<bool>; 3],
    last_outcome:     Option<PhaseOutcome>,
    reveal:           Option<Vec<Seconds>>,
    scoreboard:       Scoreboard,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_opt::<u64>(&args, "--seed")
        .unwrap_or_else(|| QuizRng::from_entropy().next_u64());
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = parse_str(&args, "--data-dir").unwrap_or("./data");

    let mut config = match parse_str(&args, "--config") {
        Some(path) => QuizConfig::load(path)?,
        None => QuizConfig::default(),
    };
    config.questions_per_run = parse_arg(&args, "--questions", config.questions_per_run);
    config.validate()?;

    let mut source = DataDirSource::new(data_dir, &config.locale);
    let version = source.latest_version()?;

    if !ipc_mode {
        println!("Cooldown Quiz: quiz-runner");
        println!("  seed:      {seed}");
        println!("  questions: {}", config.questions_per_run);
        println!("  data_dir:  {data_dir}");
        println!("  version:   {version}");
        println!();
    }

    let bank = RngBank::new(seed);
    let mut selection_rng = bank.for_slot(RngSlot::Selection);
    let mut question_rng = bank.for_slot(RngSlot::Question);
    let urls = AssetUrls::new(&version);

    if ipc_mode {
        run_ipc_loop(&mut source, &config, &urls, &mut selection_rng, &mut question_rng)?;
    } else {
        for n in 1..=config.questions_per_run {
            let q = draw_question(&mut source, &config, &mut selection_rng, &mut question_rng)?;
            print_question(n, &q);
        }
    }

    Ok(())
}

fn run_ipc_loop(
    source: &mut DataDirSource,
    config: &QuizConfig,
    urls: &AssetUrls,
    selection_rng: &mut QuizRng,
    question_rng: &mut QuizRng,
) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    let mut session = QuizSession::new();
    let mut last_outcome: Option<PhaseOutcome> = None;

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {}
            IpcCommand::NextQuestion => {
                if let Err(e) = session.next_question(source, config, selection_rng, question_rng) {
                    write_error(&mut stdout, &e.to_string())?;
                    continue;
                }
                last_outcome = None;
            }
            IpcCommand::Answer { phase, label, value } => {
                let outcome = match (phase, label, value) {
                    (1, Some(label), _) => session.answer_phase1(&label),
                    (2, _, Some(value)) => session.answer_phase2(value),
                    (3, _, Some(value)) => session.answer_phase3(value),
                    _ => {
                        write_error(&mut stdout, "answer needs phase 1 + label or phase 2/3 + value")?;
                        continue;
                    }
                };
                match outcome {
                    Ok(o) => last_outcome = Some(o),
                    Err(e) => {
                        log::warn!("rejected answer: {e}");
                        write_error(&mut stdout, &e.to_string())?;
                        continue;
                    }
                }
            }
        }

        let state = build_ui_state(&session, urls, last_outcome.clone());
        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{}", err_json)?;
    stdout.flush()?;
    Ok(())
}

fn build_ui_state(session: &QuizSession, urls: &AssetUrls, last_outcome: Option<PhaseOutcome>) -> UiState {
    let q = session.question();
    let reached = |phase: QuizPhase| session.phase().number() >= phase.number();
    UiState {
        phase:            session.phase(),
        champion:         q.map(|q| q.champion_name.clone()),
        champion_icon:    q.map(|q| urls.champion_icon(&q.champion_id)),
        spell:            q.map(|q| q.spell_name.clone()),
        spell_icon:       q.map(|q| urls.spell_icon(&q.spell_image)),
        keybind:          q.map(|q| q.keybind),
        asked_rank:       q.map(|q| q.asked_rank),
        max_rank:         q.map(|q| q.max_rank),
        range_labels:     q
            .map(|q| q.options.phase1_options.iter().map(|r| r.label.clone()).collect())
            .unwrap_or_default(),
        exact_options:    q
            .filter(|_| reached(QuizPhase::Exact))
            .map(|q| q.options.phase2_options.clone())
            .unwrap_or_default(),
        max_rank_options: q
            .filter(|_| reached(QuizPhase::MaxRank))
            .map(|q| q.options.phase3_options.clone())
            .unwrap_or_default(),
        answers:          session.answers().clone(),
        correct:          session.correctness(),
        last_outcome,
        reveal:           session.reveal().map(|cds| cds.to_vec()),
        scoreboard:       session.scoreboard().clone(),
    }
}

fn print_question(n: usize, q: &ActiveQuestion) {
    let o = &q.options;
    println!(
        "=== QUESTION {n}: {} {} ({}) rank {}/{} ===",
        q.champion_name, q.keybind, q.spell_name, q.asked_rank, q.max_rank
    );
    let labels: Vec<&str> = o.phase1_options.iter().map(|r| r.label.as_str()).collect();
    println!("  phase 1: {}  -> {}", labels.join(" | "), o.correct_range.label);
    println!("  phase 2: {}  -> {}", join_seconds(&o.phase2_options), o.correct_phase2);
    println!("  phase 3: {}  -> {}", join_seconds(&o.phase3_options), o.correct_phase3);
    println!("  table:   {}", join_seconds(&q.cooldowns));
    println!();
}

fn join_seconds(values: &[Seconds]) -> String {
    values
        .iter()
        .map(|v| format!("{v}s"))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    parse_opt(args, flag).unwrap_or(default)
}

fn parse_opt<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
}

fn parse_str<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
