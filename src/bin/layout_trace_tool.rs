use chart_layout::api::{ChartLayoutConfig, ChartLayoutEngine, DispatchOutcome, LayoutSnapshot};
use chart_layout::core::{ContainerSize, ElementMetrics};
use chart_layout::measure::StaticElementProbe;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Replay,
    Check,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutTraceFile {
    trace_name: String,
    config: ChartLayoutConfig,
    element: ElementMetrics,
    steps: Vec<TraceStep>,
    #[serde(default)]
    expected: Option<LayoutSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TraceStep {
    Mount,
    Flush,
    Action {
        action: Value,
    },
    Resize {
        width: f64,
        height: f64,
        at_us: u64,
    },
    Advance {
        at_us: u64,
    },
    Remeasure {
        #[serde(default)]
        element: Option<ElementMetrics>,
    },
}

#[derive(Debug, Clone, Serialize)]
struct StepRecord {
    index: usize,
    step: &'static str,
    outcome: String,
}

#[derive(Debug, Clone, Serialize)]
struct LayoutTraceReport {
    trace_name: String,
    steps: Vec<StepRecord>,
    snapshot: LayoutSnapshot,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let trace: LayoutTraceFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let report = replay_trace(&trace)?;
    match args.command {
        CommandKind::Replay => match &args.output {
            Some(output) => write_json(output, &report),
            None => {
                let payload = serde_json::to_string_pretty(&report)
                    .map_err(|err| format!("failed to serialize json: {err}"))?;
                println!("{payload}");
                Ok(())
            }
        },
        CommandKind::Check => {
            let expected = trace
                .expected
                .as_ref()
                .ok_or_else(|| format!("trace `{}` has no `expected` snapshot", trace.trace_name))?;
            if *expected != report.snapshot {
                return Err(format!(
                    "trace `{}` diverged from expected snapshot",
                    trace.trace_name
                ));
            }
            println!("trace `{}` matches expected snapshot", trace.trace_name);
            Ok(())
        }
    }
}

fn replay_trace(trace: &LayoutTraceFile) -> Result<LayoutTraceReport, String> {
    let mut engine = ChartLayoutEngine::new(trace.config);
    let mut probe = StaticElementProbe::new(trace.element);
    let mut steps = Vec::with_capacity(trace.steps.len());

    for (index, step) in trace.steps.iter().enumerate() {
        let (name, outcome) = match step {
            TraceStep::Mount => {
                engine.mount();
                ("mount", format!("{:?}", engine.phase()))
            }
            TraceStep::Flush => ("flush", format!("{:?}", engine.flush_sync(&mut probe))),
            TraceStep::Action { action } => {
                let outcome: DispatchOutcome = engine
                    .dispatch_value(action.clone())
                    .map_err(|err| format!("step {index}: {err}"))?;
                ("action", format!("{outcome:?}"))
            }
            TraceStep::Resize {
                width,
                height,
                at_us,
            } => {
                let scheduled = engine.on_resize(
                    ContainerSize::new(*width, *height),
                    Duration::from_micros(*at_us),
                );
                ("resize", format!("scheduled={scheduled}"))
            }
            TraceStep::Advance { at_us } => {
                let recomputed = engine.advance(Duration::from_micros(*at_us));
                ("advance", format!("recomputed={recomputed}"))
            }
            TraceStep::Remeasure { element } => {
                if let Some(element) = element {
                    probe.metrics = *element;
                }
                engine.remeasure();
                ("remeasure", format!("{:?}", engine.phase()))
            }
        };
        steps.push(StepRecord {
            index,
            step: name,
            outcome,
        });
    }

    let snapshot = engine.snapshot();
    engine.dispose();
    Ok(LayoutTraceReport {
        trace_name: trace.trace_name.clone(),
        steps,
        snapshot,
    })
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

const USAGE: &str = "usage: layout_trace_tool <replay|check> --input <path> [--output <path>]";

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("replay") => CommandKind::Replay,
        Some("check") => CommandKind::Check,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| "missing --input".to_owned())?;
    Ok(CliArgs {
        command,
        input,
        output,
    })
}
