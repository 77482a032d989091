use clap::{Args, Parser, Subcommand};
use shelf::model::ReadingStatus;
use shelf::view::Layout;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Keep track of the books you want to read, are reading and have read", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Field flags shared by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct BookFields {
    /// Book title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Book author
    #[arg(short, long)]
    pub author: Option<String>,

    /// Cover image URL (empty string removes it)
    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,

    /// Reading status: want-to-read, reading or read
    #[arg(short, long, value_parser = parse_status)]
    pub status: Option<ReadingStatus>,

    /// Rating from 1 to 5 (read books only)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    /// Review comment (read books only)
    #[arg(short, long)]
    pub comment: Option<String>,
}

impl BookFields {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.image_url.is_none()
            && self.status.is_none()
            && self.rating.is_none()
            && self.comment.is_none()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the library
    #[command(alias = "a", display_order = 1)]
    Add {
        #[command(flatten)]
        fields: BookFields,
    },

    /// List books
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only books whose title or author contain this text
        #[arg(short = 'q', long = "search")]
        search: Option<String>,

        /// Only books with this status
        #[arg(short, long, value_parser = parse_status)]
        status: Option<ReadingStatus>,

        /// Card layout: grid or list
        #[arg(short, long, value_parser = parse_layout)]
        layout: Option<Layout>,

        /// Hide review comments
        #[arg(long)]
        compact: bool,
    },

    /// Show one book with its full review
    #[command(alias = "v", display_order = 3)]
    Show {
        /// Position in the list, or an id (prefix)
        book: String,
    },

    /// Edit a book
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Position in the list, or an id (prefix)
        book: String,

        #[command(flatten)]
        fields: BookFields,

        /// Remove the rating
        #[arg(long, conflicts_with = "rating")]
        clear_rating: bool,
    },

    /// Delete a book
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Position in the list, or an id (prefix)
        book: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show how many books are in each status
    #[command(display_order = 6)]
    Stats,

    /// Get or set configuration
    #[command(display_order = 7)]
    Config {
        /// Configuration key (layout, compact)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_status(s: &str) -> Result<ReadingStatus, String> {
    s.parse()
}

fn parse_layout(s: &str) -> Result<Layout, String> {
    s.parse()
}
