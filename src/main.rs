//! The `blogmark` binary.

use blogmark::{
    add_ids_to_headings, build_outline, extract_headings, format_post, toc_to_json, About,
    Options, PageWindow, Post, PostDraft, PostStore,
};

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

const EXIT_SUCCESS: i32 = 0;
const EXIT_PARSE_CONFIG: i32 = 2;
const EXIT_READ_INPUT: i32 = 3;

#[derive(Debug, Parser)]
#[command(about, author, version)]
#[command(after_help = "\
By default, blogmark will attempt to read command-line options from a config file specified by --config-file.
This behaviour can be disabled by passing --config-file none.")]
struct Cli {
    /// Path to config file containing command-line arguments, or 'none';
    /// defaults to $XDG_CONFIG_HOME/blogmark/config
    #[arg(short, long, value_name = "PATH")]
    config_file: Option<PathBuf>,

    /// Prefix for rendered heading id attributes
    #[arg(long, global = true, value_name = "PREFIX", default_value = "")]
    id_prefix: String,

    /// Put a self-link inside every rendered heading
    #[arg(long, global = true)]
    anchor_links: bool,

    /// Posts per listing page
    #[arg(long, global = true, value_name = "N", default_value_t = 5)]
    page_size: usize,

    /// Most page numbers shown in the pagination bar
    #[arg(long, global = true, value_name = "N", default_value_t = 5)]
    max_visible_pages: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the table of contents of markdown input
    Toc {
        /// Markdown files to read; or standard input if none passed
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TocFormat::Outline)]
        format: TocFormat,
    },

    /// Append a {#id} anchor to every heading line of markdown input
    Annotate {
        /// Markdown files to read; or standard input if none passed
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Render markdown input as post HTML
    Render {
        /// Markdown files to read; or standard input if none passed
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Query and edit a post store
    Posts {
        /// JSON file holding the posts
        #[arg(short, long, value_name = "PATH", default_value = "posts.json")]
        store: PathBuf,

        #[command(subcommand)]
        command: PostsCommand,
    },

    /// Show or replace the About page text
    About {
        /// Text file holding the About page
        #[arg(short, long, value_name = "PATH", default_value = "about.txt")]
        file: PathBuf,

        /// Replace the text with the contents of this file ('-' for standard input)
        #[arg(long, value_name = "FILE")]
        set: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
enum PostsCommand {
    /// List posts, newest first
    List {
        /// Only posts with this tag (case-insensitive)
        #[arg(short, long)]
        tag: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one post with its table of contents
    Show {
        /// Post id
        id: String,
    },

    /// List every tag
    Tags,

    /// Publish a new post
    New {
        #[command(flatten)]
        draft: DraftArgs,
    },

    /// Replace the fields of an existing post
    Edit {
        /// Post id
        id: String,

        #[command(flatten)]
        draft: DraftArgs,
    },

    /// Delete a post
    Delete {
        /// Post id
        id: String,
    },
}

#[derive(Debug, clap::Args)]
struct DraftArgs {
    /// Post title
    #[arg(long)]
    title: String,

    /// Short summary for listings
    #[arg(long)]
    excerpt: Option<String>,

    /// Tag to attach; may be repeated
    #[arg(short, long = "tag", value_name = "TAG")]
    tags: Vec<String>,

    /// File holding the post body; or standard input if none passed
    #[arg(value_name = "FILE")]
    content: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TocFormat {
    /// Indented outline
    Outline,
    /// One "level id text" line per heading
    Flat,
    /// JSON array of {id, text, level}
    Json,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut cli = Cli::parse();

    let config_file = cli
        .config_file
        .clone()
        .or_else(|| get_default_config_path().map(PathBuf::from));
    if let Some(path) = config_file {
        if path.to_str() != Some("none") {
            match fs::read_to_string(&path) {
                Ok(config) => {
                    let mut args = std::env::args_os().collect::<Vec<_>>();
                    match shell_words::split(&config) {
                        Ok(words) => {
                            log::debug!("read {} arguments from {}", words.len(), path.display());
                            args.splice(1..1, words.into_iter().map(Into::into));
                            cli = Cli::parse_from(args);
                        }
                        Err(e) => {
                            eprintln!("failed to parse {}: {}", path.display(), e);
                            process::exit(EXIT_PARSE_CONFIG);
                        }
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => (),
                Err(e) => {
                    eprintln!("failed to read {}: {}", path.display(), e);
                    process::exit(EXIT_READ_INPUT);
                }
            }
        }
    }

    let mut options = Options::default();
    options.render.id_prefix = cli.id_prefix;
    options.render.anchor_links = cli.anchor_links;
    options.listing.page_size = cli.page_size;
    options.listing.max_visible_pages = cli.max_visible_pages;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match cli.command {
        Command::Toc { files, format } => {
            let input = read_input(&files)?;
            let toc = extract_headings(&input);
            match format {
                TocFormat::Json => writeln!(out, "{}", toc_to_json(&toc)?)?,
                TocFormat::Flat => {
                    for entry in &toc {
                        writeln!(out, "{} {} {}", entry.level, entry.id, entry.text)?;
                    }
                }
                TocFormat::Outline => {
                    for node in build_outline(&toc) {
                        for (depth, entry) in node.walk() {
                            writeln!(out, "{}- [{}](#{})", "  ".repeat(depth), entry.text, entry.id)?;
                        }
                    }
                }
            }
        }
        Command::Annotate { files } => {
            let input = read_input(&files)?;
            out.write_all(add_ids_to_headings(&input).as_bytes())?;
        }
        Command::Render { files } => {
            let input = read_input(&files)?;
            format_post(&input, &options, &mut out)?;
        }
        Command::Posts { store, command } => posts(&store, command, &options, &mut out)?,
        Command::About { file, set } => {
            let about = match set {
                Some(source) => {
                    let files = if source.to_str() == Some("-") {
                        vec![]
                    } else {
                        vec![source]
                    };
                    About::save(&file, &read_input(&files)?)?
                }
                None => About::load(&file)?,
            };
            writeln!(out, "{}", about.content)?;
        }
    }

    out.flush()?;
    drop(out);
    process::exit(EXIT_SUCCESS);
}

fn posts(
    path: &Path,
    command: PostsCommand,
    options: &Options,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    let mut store = PostStore::load(path)?;

    match command {
        PostsCommand::List { tag, page, json } => {
            let listing = store.list(tag.as_deref(), page, &options.listing);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
                return Ok(());
            }

            if listing.total == 0 {
                match &tag {
                    Some(tag) => writeln!(out, "No posts tagged \"{}\".", tag)?,
                    None => writeln!(out, "No posts yet.")?,
                }
            } else if listing.items.is_empty() {
                writeln!(
                    out,
                    "Page {} is past the last page ({}).",
                    listing.page, listing.total_pages
                )?;
            }
            for post in &listing.items {
                write_summary(out, post)?;
            }

            let window = PageWindow::new(
                listing.page,
                listing.total_pages,
                options.listing.max_visible_pages,
            );
            if window.is_needed() {
                write_window(out, &window, tag.as_deref())?;
            }
            if let Some((first, last)) = listing.span() {
                writeln!(out, "{}-{} of {}", first, last, listing.total)?;
            }
        }
        PostsCommand::Show { id } => {
            let post = store
                .get(&id)
                .ok_or_else(|| blogmark::Error::NotFound(id.clone()))?;
            write_summary(out, post)?;
            for entry in post.toc() {
                writeln!(out, "{}- {}", "  ".repeat(entry.level as usize - 1), entry.text)?;
            }
            writeln!(out)?;
            writeln!(out, "{}", post.content)?;
        }
        PostsCommand::Tags => {
            for tag in store.tags() {
                writeln!(out, "{}", tag)?;
            }
        }
        PostsCommand::New { draft } => {
            let id = store.create(draft.into_draft()?, chrono::Utc::now())?;
            store.save(path)?;
            writeln!(out, "{}", id)?;
        }
        PostsCommand::Edit { id, draft } => {
            store.update(&id, draft.into_draft()?)?;
            store.save(path)?;
        }
        PostsCommand::Delete { id } => {
            let post = store.delete(&id)?;
            store.save(path)?;
            writeln!(out, "deleted {}: {}", post.id, post.title)?;
        }
    }

    Ok(())
}

impl DraftArgs {
    fn into_draft(self) -> io::Result<PostDraft> {
        let files: Vec<PathBuf> = self.content.into_iter().collect();
        Ok(PostDraft {
            title: self.title,
            excerpt: self.excerpt,
            content: read_input(&files)?,
            tags: self.tags,
        })
    }
}

fn write_summary(out: &mut dyn Write, post: &Post) -> io::Result<()> {
    writeln!(out, "[{}] {}", post.id, post.title)?;
    writeln!(out, "    {}", post.date.format("%Y-%m-%d %H:%M"))?;
    if let Some(excerpt) = &post.excerpt {
        writeln!(out, "    {}", excerpt)?;
    }
    if !post.tags.is_empty() {
        writeln!(out, "    tags: {}", post.tags.join(", "))?;
    }
    Ok(())
}

fn write_window(out: &mut dyn Write, window: &PageWindow, tag: Option<&str>) -> io::Result<()> {
    let mut bar = vec![];
    if let Some(previous) = window.previous {
        bar.push(format!("< {}", previous));
    }
    if let Some(first) = window.first {
        bar.push(first.to_string());
        if window.leading_gap {
            bar.push("...".to_string());
        }
    }
    for page in window.pages() {
        if page == window.current {
            bar.push(format!("[{}]", page));
        } else {
            bar.push(page.to_string());
        }
    }
    if let Some(last) = window.last {
        if window.trailing_gap {
            bar.push("...".to_string());
        }
        bar.push(last.to_string());
    }
    if let Some(next) = window.next {
        bar.push(format!("{} >", next));
    }
    writeln!(out, "{}", bar.join(" "))?;

    if let Some(previous) = window.previous {
        writeln!(out, "previous: {}", PageWindow::href(previous, tag))?;
    }
    if let Some(next) = window.next {
        writeln!(out, "next: {}", PageWindow::href(next, tag))?;
    }
    Ok(())
}

fn read_input(files: &[PathBuf]) -> io::Result<String> {
    let mut s = String::with_capacity(2048);

    if files.is_empty() {
        io::stdin().read_to_string(&mut s)?;
    } else {
        for f in files {
            let mut io = fs::File::open(f)?;
            io.read_to_string(&mut s)?;
        }
    }

    Ok(s)
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_default_config_path() -> Option<std::ffi::OsString> {
    if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("blogmark") {
        if let Ok(path) = xdg_dirs.place_config_file("config") {
            return Some(path.into_os_string());
        }
    }

    None
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_default_config_path() -> Option<std::ffi::OsString> {
    None
}
