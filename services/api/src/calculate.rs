use admission_score::error::AppError;
use admission_score::scoring::{
    composite_score, AchievementRecord, CompositeScore, ScoreEngine, ScoreOutcome, Semester,
};
use clap::Args;
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// JSON achievement record to score, or `-` for stdin
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the breakdown as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompositeArgs {
    /// Document evaluation score (out of 300)
    #[arg(long)]
    pub(crate) document: Decimal,
    /// Competency evaluation score (0-100)
    #[arg(long)]
    pub(crate) competency: Option<Decimal>,
    /// Interview score (0-100)
    #[arg(long)]
    pub(crate) interview: Option<Decimal>,
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let record = read_record(&args.input)?;
    let outcome = ScoreEngine::new().calculate(&record)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.view())?);
    } else {
        render_outcome(&mut io::stdout().lock(), &outcome)?;
    }
    Ok(())
}

pub(crate) fn run_composite(args: CompositeArgs) -> Result<(), AppError> {
    let composite = composite_score(Some(args.document), args.competency, args.interview)?;
    render_composite(&mut io::stdout().lock(), composite.as_ref())?;
    Ok(())
}

fn read_record(input: &Path) -> Result<AchievementRecord, AppError> {
    let raw = if input == Path::new("-") {
        io::read_to_string(io::stdin())?
    } else {
        std::fs::read_to_string(input)?
    };
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn render_outcome(out: &mut impl Write, outcome: &ScoreOutcome) -> io::Result<()> {
    let breakdown = match outcome {
        ScoreOutcome::Ged(ged) => {
            writeln!(out, "Document evaluation (GED)")?;
            writeln!(out, "- Examination average: {}", ged.average_score)?;
            return Ok(());
        }
        ScoreOutcome::Transcript(breakdown) => breakdown,
    };

    writeln!(out, "Document evaluation ({})", breakdown.graduation_type)?;
    writeln!(out, "General subjects")?;
    for semester in Semester::SCORED {
        if let Some(score) = breakdown.semester_scores.get(semester) {
            writeln!(out, "  - {}: {:>8}", semester, score)?;
        }
    }
    let rows = [
        ("General subjects total", breakdown.general_subjects_score),
        ("Arts/physical education", breakdown.arts_physical_subjects_score),
        ("Subjects total", breakdown.total_subjects_score),
        ("Attendance", breakdown.attendance_score),
        ("Volunteer", breakdown.volunteer_score),
        ("Non-subjects total", breakdown.total_non_subjects_score),
        ("Document score", breakdown.total_score),
    ];
    for (label, score) in rows {
        writeln!(out, "- {:<24} {:>8}", label, score)?;
    }
    writeln!(out, "- Absence days counted: {}", breakdown.absence_days_count)
}

pub(crate) fn render_composite(
    out: &mut impl Write,
    composite: Option<&CompositeScore>,
) -> io::Result<()> {
    let Some(composite) = composite else {
        return writeln!(
            out,
            "Composite unavailable: competency and interview scores are both required"
        );
    };

    writeln!(out, "Composite score")?;
    writeln!(
        out,
        "- Document {} -> {} on a 100-point basis",
        composite.document_evaluation_score, composite.rescaled_document_score
    )?;
    writeln!(out, "- Competency {}", composite.competency_evaluation_score)?;
    writeln!(out, "- Interview {}", composite.interview_score)?;
    writeln!(out, "- Final {}", composite.final_score)
}
