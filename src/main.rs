use anyhow::{bail, Result};
use cifra::cli::{Cli, OutputFormat};
use cifra::json_output::{JsonManifest, JsonNamespace};
use cifra::namespace::Namespace;
use cifra::registry::{self, Definitions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Print the export manifest, one name per line in registration order
fn print_manifest(definitions: &Definitions, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for name in definitions.export_manifest() {
                println!("{name}");
            }
        }
        OutputFormat::Json => {
            let manifest = JsonManifest::from_definitions(definitions);
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
    }
    Ok(())
}

/// Print a namespace's members sorted by short name
fn print_namespace(name: &str, namespace: &Namespace, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{} ({} members)", name, namespace.len());
            for short in namespace.names() {
                // names() only returns bound members
                let value = namespace.get(short)?;
                println!("{short} = {value}");
            }
        }
        OutputFormat::Json => {
            let view = JsonNamespace::new(name, namespace);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}

/// Look up a published namespace or fail with the known names
fn find_namespace<'a>(definitions: &'a Definitions, name: &str) -> Result<&'a Namespace> {
    match definitions.namespace(name) {
        Some(namespace) => Ok(namespace),
        None => bail!(
            "unknown namespace: {}. Published namespaces: {}",
            name,
            registry::UNDEFINED_NAMESPACE
        ),
    }
}

/// Resolve NAMESPACE.MEMBER to its value
fn resolve_member(definitions: &Definitions, target: &str, format: OutputFormat) -> Result<()> {
    let Some((namespace_name, member)) = target.split_once('.') else {
        bail!("expected NAMESPACE.MEMBER, got: {target}");
    };
    let namespace = find_namespace(definitions, namespace_name)?;
    let value = namespace.get(member)?;
    match format {
        OutputFormat::Text => println!("{namespace_name}.{member} = {value}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "namespace": namespace_name,
                "member": member,
                "value": value,
            })
        ),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let definitions = registry::definitions();

    if cli.list {
        return print_manifest(definitions, cli.format);
    }

    if let Some(target) = &cli.resolve {
        return resolve_member(definitions, target, cli.format);
    }

    if let Some(name) = &cli.namespace {
        let namespace = find_namespace(definitions, name)?;
        if let Some(value) = cli.name_of {
            match namespace.name_of(value) {
                Some(short) => println!("{short}"),
                None => bail!("no member of {name} is bound to {value}"),
            }
            return Ok(());
        }
        return print_namespace(name, namespace, cli.format);
    }

    // No action flags: same output as --list.
    print_manifest(definitions, cli.format)
}
