use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-registry")]
#[command(about = "An interactive console registry for courses and student enrollments")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        help = "Allow a student to register for the same course more than once"
    )]
    pub legacy_duplicates: bool,
}
