// DocProof CLI - Command-line client for the DocProof registry

use std::path::Path;

use clap::{Parser, Subcommand};
use colored::Colorize;

use docproof_core::hash::{is_well_formed_hash, sha256_hex, truncate_hash};
use docproof_core::types::{
    Document, DocumentStats, NewDocument, RegisterDocumentResponse, RevokeResponse,
    VerificationResult,
};

/// DocProof - Document Registration & Verification Tool
#[derive(Parser)]
#[command(name = "docproof")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the DocProof server
    #[arg(long, global = true, default_value = "http://localhost:5000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the SHA-256 content hash of a file
    Hash {
        /// Path to the file to hash
        path: String,
    },
    /// Register a file with the registry
    Register {
        /// Path to the file to register
        path: String,

        /// Document title
        #[arg(short, long)]
        title: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,

        /// Identifier of the registering party
        #[arg(long, default_value = "docproof-cli")]
        issuer: String,

        /// Optional opaque content reference
        #[arg(long)]
        ipfs: Option<String>,

        /// List the document publicly
        #[arg(long)]
        public: bool,
    },
    /// Verify a file (or a raw 64-hex-char hash) against the registry
    Verify {
        /// Path to a file, or a content hash
        target: String,
    },
    /// List registered documents
    List,
    /// Revoke a registered document by hash
    Revoke {
        /// Content hash of the document to revoke
        hash: String,
    },
    /// Show registry statistics
    Stats,
}

fn main() {
    let cli = Cli::parse();
    let server = cli.server.trim_end_matches('/').to_string();

    let result = match cli.command {
        Commands::Hash { path } => handle_hash(&path),
        Commands::Register {
            path,
            title,
            description,
            issuer,
            ipfs,
            public,
        } => handle_register(&server, &path, title, description, issuer, ipfs, public),
        Commands::Verify { target } => handle_verify(&server, &target),
        Commands::List => handle_list(&server),
        Commands::Revoke { hash } => handle_revoke(&server, &hash),
        Commands::Stats => handle_stats(&server),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Reads a file and returns its SHA-256 hex digest.
fn hash_file(path: &str) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", path, e))?;
    Ok(sha256_hex(&bytes))
}

/// Resolves a verify target: an existing file is hashed; anything else
/// must already be a well-formed content hash.
fn resolve_hash_target(target: &str) -> anyhow::Result<String> {
    if Path::new(target).is_file() {
        return hash_file(target);
    }
    if is_well_formed_hash(target) {
        return Ok(target.to_ascii_lowercase());
    }
    anyhow::bail!(
        "'{}' is neither a readable file nor a 64-character hex hash",
        target
    )
}

fn handle_hash(path: &str) -> anyhow::Result<()> {
    println!("{}", hash_file(path)?);
    Ok(())
}

fn handle_register(
    server: &str,
    path: &str,
    title: String,
    description: Option<String>,
    issuer: String,
    ipfs: Option<String>,
    public: bool,
) -> anyhow::Result<()> {
    let hash = hash_file(path)?;
    let filename = Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string());

    let new = NewDocument {
        title,
        filename,
        document_hash: hash.clone(),
        ipfs_hash: ipfs,
        description,
        is_public: public,
        is_revoked: false,
        issuer,
    };

    let response = post_json(&format!("{}/api/documents", server), &new)?;
    let registered: RegisterDocumentResponse = response.into_json()?;

    println!(
        "{} {}",
        "✓".green().bold(),
        "Document registered".green()
    );
    println!();
    println!("  Id:    {}", registered.document.id);
    println!("  Title: {}", registered.document.title);
    println!("  Hash:  {}", hash);
    Ok(())
}

fn handle_verify(server: &str, target: &str) -> anyhow::Result<()> {
    let hash = resolve_hash_target(target)?;

    let response = get_json(&format!("{}/api/verify/{}", server, hash))?;
    let result: VerificationResult = response.into_json()?;

    if result.exists && result.is_valid {
        println!("{} {}", "✓".green().bold(), "Document is valid".green());
        println!();
        if let Some(issuer) = &result.issuer {
            println!("  Issuer:     {}", issuer);
        }
        if let Some(timestamp) = &result.timestamp {
            println!("  Registered: {}", timestamp);
        }
        if let Some(block) = &result.block_number {
            println!("  Block:      {}", block);
        }
        if let Some(tx) = &result.transaction_hash {
            println!("  Tx:         {}", truncate_hash(tx, 18));
        }
        if let Some(events) = &result.verifications {
            println!("  Checks:     {}", events.len());
        }
        Ok(())
    } else if result.exists {
        eprintln!(
            "{} {}",
            "✗".red().bold(),
            "Document has been revoked".red()
        );
        anyhow::bail!("document is revoked")
    } else {
        eprintln!(
            "{} {}",
            "✗".red().bold(),
            "No document registered for this hash".red()
        );
        anyhow::bail!("hash not found in registry")
    }
}

fn handle_list(server: &str) -> anyhow::Result<()> {
    let response = get_json(&format!("{}/api/documents", server))?;
    let documents: Vec<Document> = response.into_json()?;

    if documents.is_empty() {
        println!("No documents registered.");
        return Ok(());
    }

    for document in documents {
        let status = if document.is_revoked {
            "revoked".red().to_string()
        } else {
            "valid".green().to_string()
        };
        println!(
            "{}  {}  [{}]  {}",
            truncate_hash(&document.document_hash, 16),
            document.created_at.format("%Y-%m-%d"),
            status,
            document.title,
        );
    }
    Ok(())
}

fn handle_revoke(server: &str, hash: &str) -> anyhow::Result<()> {
    let url = format!("{}/api/documents/{}/revoke", server, hash);
    let response = check_status(ureq::request("PATCH", &url).call())?;
    let revoked: RevokeResponse = response.into_json()?;

    println!("{} {}", "✓".green().bold(), revoked.message.green());
    Ok(())
}

fn handle_stats(server: &str) -> anyhow::Result<()> {
    let response = get_json(&format!("{}/api/stats", server))?;
    let stats: DocumentStats = response.into_json()?;

    println!("Total documents: {}", stats.total_documents);
    println!("Valid:           {}", stats.verified);
    println!("Revoked:         {}", stats.revoked);
    println!("This month:      {}", stats.this_month);
    Ok(())
}

fn get_json(url: &str) -> anyhow::Result<ureq::Response> {
    check_status(ureq::get(url).call())
}

fn post_json(url: &str, body: &impl serde::Serialize) -> anyhow::Result<ureq::Response> {
    check_status(ureq::post(url).send_json(serde_json::to_value(body)?))
}

/// Unwraps a ureq result, turning HTTP error statuses into readable
/// errors carrying the server's `{"error": ...}` message.
fn check_status(result: Result<ureq::Response, ureq::Error>) -> anyhow::Result<ureq::Response> {
    match result {
        Ok(response) => Ok(response),
        Err(ureq::Error::Status(code, response)) => {
            let body: serde_json::Value = response.into_json().unwrap_or_default();
            let message = body["error"].as_str().unwrap_or("unknown error").to_string();
            anyhow::bail!("server returned {}: {}", code, message)
        }
        Err(e) => Err(e.into()),
    }
}
