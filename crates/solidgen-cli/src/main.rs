//! solidgen CLI - SolidJS component and page scaffolding

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use solidgen_core::{
    init_kind, preview_template, scaffold_template, to_pascal_case, ArtifactKind,
    ComponentTemplate, ComponentVariant, Formatter, PageTemplate, ScaffoldError, Template,
};

#[derive(Parser, Debug)]
#[command(name = "solidgen")]
#[command(about = "Scaffold SolidJS components and pages")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize the components or pages directory
    Init(InitArgs),
    /// Generate a component
    #[command(visible_alias = "gen")]
    Comp(CompArgs),
    /// Generate a page
    Page(PageArgs),
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Which directory to initialize
    #[arg(value_enum)]
    target: InitTarget,

    /// Skip confirmation
    #[arg(short, long)]
    yes: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InitTarget {
    Comps,
    Pages,
}

impl From<InitTarget> for ArtifactKind {
    fn from(target: InitTarget) -> Self {
        match target {
            InitTarget::Comps => ArtifactKind::Component,
            InitTarget::Pages => ArtifactKind::Page,
        }
    }
}

#[derive(Parser, Debug)]
struct CompArgs {
    /// Component name (any casing; normalized to PascalCase)
    name: String,

    /// SolidJS component type
    #[arg(short = 't', long = "type", value_enum, default_value_t = ComponentVariant::Base)]
    variant: ComponentVariant,

    /// Print generated code without writing to the filesystem
    #[arg(long)]
    dry_run: bool,
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Page name (any casing; normalized to PascalCase, `Page` suffix added)
    name: String,

    /// Print generated code without writing to the filesystem
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = match args.command {
        Command::Init(init_args) => run_init(init_args).await,
        Command::Comp(comp_args) => run_comp(comp_args).await,
        Command::Page(page_args) => run_page(page_args).await,
    };

    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        let _ = cliclack::log::error(format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn run_init(args: InitArgs) -> Result<()> {
    let kind = ArtifactKind::from(args.target);
    let base_dir = kind.base_dir();

    // Existence is checked before the confirmation prompt
    if base_dir.exists() {
        return Err(ScaffoldError::AlreadyExists {
            kind,
            path: base_dir,
        }
        .into());
    }

    if !args.yes {
        let confirm: bool = cliclack::confirm(format!(
            "Initialize {} directory '{}'?",
            kind,
            base_dir.display()
        ))
        .initial_value(true)
        .interact()?;

        if !confirm {
            cliclack::log::info("Skipped initialization")?;
            return Ok(());
        }
    }

    let index_path = init_kind(kind, &base_dir).await?;
    cliclack::log::success(format!(
        "Created {} directory '{}' with index '{}'",
        kind,
        base_dir.display(),
        index_path.display()
    ))?;

    Ok(())
}

async fn run_comp(args: CompArgs) -> Result<()> {
    let name = normalized_name(&args.name)?;
    let template = ComponentTemplate::new(name, args.variant);
    generate(&template, args.dry_run).await
}

async fn run_page(args: PageArgs) -> Result<()> {
    let name = normalized_name(&args.name)?;
    let template = PageTemplate::new(name);
    generate(&template, args.dry_run).await
}

fn normalized_name(raw: &str) -> Result<String> {
    let name = to_pascal_case(raw);
    if name.is_empty() {
        return Err(ScaffoldError::EmptyName.into());
    }
    Ok(name)
}

/// Build, format, and either print (dry-run) or scaffold the artifact.
async fn generate<T: Template>(template: &T, dry_run: bool) -> Result<()> {
    let kind = template.kind();
    let formatter = Formatter::biome(&format!("{}.tsx", template.name()));

    if dry_run {
        print!("{}", preview_template(template, &formatter).await);
        return Ok(());
    }

    let created =
        scaffold_template(template, &kind.base_dir(), &kind.index_path(), &formatter).await?;

    cliclack::log::success(format!("Created {} '{}'", kind, created.dir.display()))?;

    Ok(())
}
