use clap::{Args, ValueEnum};
use serde::Serialize;
use smartdo_core::assignment::parse_importance;
use smartdo_core::{build_classifier, ClassifierKind, Config, PriorityLabel};

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Rules,
    NearestNeighbour,
}

impl From<KindArg> for ClassifierKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Rules => ClassifierKind::Rules,
            KindArg::NearestNeighbour => ClassifierKind::NearestNeighbour,
        }
    }
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// Estimated effort in minutes
    #[arg(long)]
    estimated_time: u32,
    /// Days until the due date (negative when overdue)
    #[arg(long, allow_negative_numbers = true)]
    days_left: i64,
    /// Importance: low, medium or high
    #[arg(long)]
    importance: String,
    /// Override the configured classifier
    #[arg(long, value_enum)]
    kind: Option<KindArg>,
    /// Print JSON instead of the bare label
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Classification {
    estimated_time: u32,
    days_left: i64,
    importance_score: u8,
    classifier: ClassifierKind,
    priority: PriorityLabel,
}

pub fn run(args: ClassifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default().classifier;
    if let Some(kind) = args.kind {
        config.kind = kind.into();
    }
    if args.estimated_time == 0 {
        return Err("estimated time must be greater than zero".into());
    }
    let importance = parse_importance(&args.importance)?;

    let classifier = build_classifier(&config)?;
    let priority = classifier.classify(args.estimated_time, args.days_left, importance.score());

    if args.json {
        let result = Classification {
            estimated_time: args.estimated_time,
            days_left: args.days_left,
            importance_score: importance.score(),
            classifier: config.kind,
            priority,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{priority}");
    }
    Ok(())
}
