use api_shared::LinkSetRes;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use vpr_links::{catalog, find_link_set, render_links, LinkDescriptor, LinkError, LinkSet};

#[derive(Parser)]
#[command(name = "vpr-links")]
#[command(about = "VPR contextual navigation links CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the names of the predefined link sets
    List,
    /// Print a link set as JSON
    Show {
        /// Link set name, e.g. patient-care
        name: String,
    },
    /// Render a link set as an HTML fragment
    Render {
        /// Link set name, e.g. patient-care
        name: String,
        /// Extra class appended to the list's base class
        #[arg(long, default_value = "")]
        class_name: String,
    },
    /// Render a JSON file holding an array of link descriptors as an HTML fragment
    RenderFile {
        /// Path to the JSON file
        path: PathBuf,
        /// Extra class appended to the list's base class
        #[arg(long, default_value = "")]
        class_name: String,
    },
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("vpr_links=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(command) => match execute(command) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            println!("Use 'vpr-links --help' for commands");
        }
    }

    Ok(())
}

/// Runs one command and returns what it prints on stdout.
fn execute(command: Commands) -> CliResult<String> {
    match command {
        Commands::List => Ok(catalog().names().collect::<Vec<_>>().join("\n")),
        Commands::Show { name } => {
            let set = lookup(&name)?;
            Ok(serde_json::to_string_pretty(&LinkSetRes::from(set))?)
        }
        Commands::Render { name, class_name } => {
            let set = lookup(&name)?;
            Ok(render_links(set.links(), &class_name).to_html())
        }
        Commands::RenderFile { path, class_name } => {
            let links = read_descriptors(&path)?;
            tracing::debug!("read {} links from {}", links.len(), path.display());
            Ok(render_links(&links, &class_name).to_html())
        }
    }
}

fn lookup(name: &str) -> Result<&'static LinkSet, LinkError> {
    find_link_set(name).ok_or_else(|| LinkError::UnknownLinkSet(name.to_owned()))
}

/// Reads and validates a JSON array of link descriptors.
fn read_descriptors(path: &Path) -> CliResult<Vec<LinkDescriptor>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let links = serde_json::from_str(&contents)
        .map_err(|e| format!("invalid links in {}: {}", path.display(), e))?;
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_list_prints_names_in_catalog_order() {
        let output = execute(Commands::List).expect("list");
        assert_eq!(
            output,
            "patient-care\nclinical-documentation\nreferral-management"
        );
    }

    #[test]
    fn test_show_prints_set_json() {
        let output = execute(Commands::Show {
            name: "patient-care".into(),
        })
        .expect("show");
        let json: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(json["name"], "patient-care");
        assert_eq!(json["links"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_render_unknown_set_fails() {
        let err = execute(Commands::Render {
            name: "billing".into(),
            class_name: String::new(),
        })
        .expect_err("unknown set");
        assert_eq!(err.to_string(), "unknown link set: billing");
    }

    #[test]
    fn test_render_set_html() {
        let output = execute(Commands::Render {
            name: "referral-management".into(),
            class_name: "footer".into(),
        })
        .expect("render");
        assert!(output.starts_with("<div class=\"link-list stack gap-xs footer\">"));
        assert_eq!(output.matches("<a ").count(), 3);
    }

    #[test]
    fn test_render_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"text":"X","href":"/a"}},{{"text":"Y","href":"https://ex.org","external":true,"title":"Ext"}}]"#
        )
        .expect("write links");

        let output = execute(Commands::RenderFile {
            path: file.path().to_path_buf(),
            class_name: String::new(),
        })
        .expect("render file");
        assert_eq!(output.matches("<a ").count(), 2);
        assert!(output.contains("href=\"/a\""));
        assert!(output.contains("rel=\"noopener noreferrer\""));
        assert!(output.contains("title=\"Ext\""));
    }

    #[test]
    fn test_render_file_rejects_invalid_links() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"[{{"text":"","href":"/a"}}]"#).expect("write links");

        let err = execute(Commands::RenderFile {
            path: file.path().to_path_buf(),
            class_name: String::new(),
        })
        .expect_err("blank text");
        assert!(err.to_string().contains("invalid links"));
    }
}
