use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "cardsmith", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render front, back and both print sheets.
    Render(RenderArgs),
    /// Print the layout registry.
    Layouts,
    /// List assets of one kind in a library.
    List(ListArgs),
    /// Copy a file into a library.
    Import(ImportArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Render configuration JSON.
    #[arg(long)]
    config: PathBuf,

    /// Asset library root.
    #[arg(long)]
    assets: PathBuf,

    /// Output directory; created if missing.
    #[arg(long)]
    out: PathBuf,

    /// Output image format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Jpeg)]
    format: FormatChoice,

    /// Render front and back on separate threads.
    #[arg(long)]
    parallel: bool,

    /// Print diagnostics about font resolution (family name + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Asset library root.
    #[arg(long)]
    assets: PathBuf,

    /// Kind to list; every kind when omitted.
    #[arg(long, value_enum)]
    kind: Option<KindChoice>,
}

#[derive(Parser, Debug)]
struct ImportArgs {
    /// Asset library root.
    #[arg(long)]
    assets: PathBuf,

    #[arg(long, value_enum)]
    kind: KindChoice,

    /// File to copy; its file name becomes the asset name.
    file: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Jpeg,
    Png,
}

impl From<FormatChoice> for cardsmith::ImageEncoding {
    fn from(c: FormatChoice) -> Self {
        match c {
            FormatChoice::Jpeg => cardsmith::ImageEncoding::Jpeg,
            FormatChoice::Png => cardsmith::ImageEncoding::Png,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Illustrations,
    Fonts,
    BackPages,
}

impl From<KindChoice> for cardsmith::AssetKind {
    fn from(c: KindChoice) -> Self {
        match c {
            KindChoice::Illustrations => cardsmith::AssetKind::Illustration,
            KindChoice::Fonts => cardsmith::AssetKind::Font,
            KindChoice::BackPages => cardsmith::AssetKind::BackPage,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Layouts => cmd_layouts(),
        Command::List(args) => cmd_list(args),
        Command::Import(args) => cmd_import(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = cardsmith::RenderConfig::from_json_file(&args.config)?;
    let library = cardsmith::AssetLibrary::new(&args.assets);

    config.layout()?;
    config.zoom_factor()?;
    let assets = cardsmith::PreparedAssets::prepare(&config, &library)?;
    if args.dump_fonts {
        dump_font_diagnostics(&assets);
    }

    let opts = cardsmith::RenderOpts {
        encoding: args.format.into(),
        parallel: args.parallel,
    };
    let postcard = cardsmith::render_postcard(&config, &assets, opts)?;

    let mut sink = cardsmith::DirSink::new(&args.out);
    for path in postcard.write_to(&mut sink)? {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_layouts() -> anyhow::Result<()> {
    for layout in cardsmith::layouts() {
        println!(
            "{}: draw area {}x{}, offset ({}, {}); {}",
            layout.name,
            layout.draw_area.width,
            layout.draw_area.height,
            layout.draw_offset.0,
            layout.draw_offset.1,
            layout.describe_slots()
        );
    }
    Ok(())
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let library = cardsmith::AssetLibrary::new(&args.assets);
    let Some(kind) = args.kind else {
        for kind in cardsmith::AssetKind::ALL {
            println!("{kind}:");
            for name in library.list(kind)? {
                println!("  {name}");
            }
        }
        return Ok(());
    };
    for name in library.list(kind.into())? {
        println!("{name}");
    }
    Ok(())
}

fn cmd_import(args: ImportArgs) -> anyhow::Result<()> {
    let library = cardsmith::AssetLibrary::new(&args.assets);
    let name = file_name(&args.file)?;
    let bytes =
        std::fs::read(&args.file).with_context(|| format!("read '{}'", args.file.display()))?;
    let path = library.import(args.kind.into(), &name, &bytes)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn file_name(path: &Path) -> anyhow::Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("'{}' has no file name", path.display()))
}

fn dump_font_diagnostics(assets: &cardsmith::PreparedAssets) {
    eprintln!("font diagnostics:");
    for font in assets.fonts() {
        eprintln!("  {}:", font.name);
        eprintln!("    family:      {}", font.family);
        eprintln!("    sha256:      {}", sha256_hex(&font.bytes));
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
