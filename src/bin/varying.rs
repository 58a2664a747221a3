use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use varying::{
    Rng64, SampleBatchOpts, compile_varying, interpret, linspace, optimize, parse, sample_batch,
    to_polynomial, to_shader_code,
};

#[derive(Parser, Debug)]
#[command(name = "varying", version)]
struct Cli {
    /// Raise log verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpret an expression at one time.
    Eval(EvalArgs),
    /// Print the shader source for an expression.
    Shader(ShaderArgs),
    /// Print the optimized polynomial form as JSON.
    Poly(PolyArgs),
    /// Sample an expression over a range and print a JSON array.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Expression, e.g. "lerp(0, t, t)".
    expr: String,

    /// Time to evaluate at.
    #[arg(long, allow_negative_numbers = true)]
    t: f32,

    /// Seed for random draws.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Parser, Debug)]
struct ShaderArgs {
    /// Expression to render.
    expr: String,

    /// Print the output even when it contains the random sentinel.
    #[arg(long)]
    allow_unsupported: bool,
}

#[derive(Parser, Debug)]
struct PolyArgs {
    /// Expression to convert.
    expr: String,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Expression to sample.
    expr: String,

    /// First sample time.
    #[arg(long, allow_negative_numbers = true)]
    from: f32,

    /// Last sample time.
    #[arg(long, allow_negative_numbers = true)]
    to: f32,

    /// Number of evenly spaced samples, both ends included.
    #[arg(long)]
    steps: usize,

    /// Seed for random draws.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Sample chunks on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads when `--parallel` is set.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Shader(args) => cmd_shader(args),
        Command::Poly(args) => cmd_poly(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn parse_expr(src: &str) -> anyhow::Result<varying::VaryingNode> {
    parse(src).with_context(|| format!("parse expression '{src}'"))
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let tree = parse_expr(&args.expr)?;
    let f = interpret(&tree);
    let mut rng = Rng64::new(args.seed);
    println!("{}", f.call(args.t, &mut rng));
    Ok(())
}

fn cmd_shader(args: ShaderArgs) -> anyhow::Result<()> {
    let tree = parse_expr(&args.expr)?;
    let code = to_shader_code(&tree);
    if !code.is_valid() && !args.allow_unsupported {
        anyhow::bail!(
            "shader output contains {} unsupported random draw(s): {code}",
            code.unsupported
        );
    }
    println!("{code}");
    Ok(())
}

fn cmd_poly(args: PolyArgs) -> anyhow::Result<()> {
    let tree = parse_expr(&args.expr)?;
    let poly = optimize(&to_polynomial(&tree)?);
    println!(
        "{}",
        serde_json::to_string(&poly).context("serialize polynomial")?
    );
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let tree = parse_expr(&args.expr)?;
    let times = linspace(args.from, args.to, args.steps)?;
    let opts = SampleBatchOpts {
        parallel: args.parallel,
        threads: args.threads,
        seed: args.seed,
        ..SampleBatchOpts::default()
    };
    let values = sample_batch(&compile_varying(&tree), &times, &opts)?;
    println!(
        "{}",
        serde_json::to_string(&values).context("serialize samples")?
    );
    eprintln!("sampled {} point(s)", values.len());
    Ok(())
}
