use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{info, info_span};
use zeus_core::{
    AccessError, Authorizer, QuoteError, QuoteRequest, Scope, all_publications, bearer_token,
    get_publication, get_publications, hash_key, list_publications, quote_publications,
};
use zeus_directory::{FileDirectory, PublicationDirectory};
use zeus_postcode::PostcodeError;

use crate::cli::{PublicationsArgs, QuoteArgs};
use crate::config::Config;
use crate::logging::redact_value;
use crate::summary::{directory_table, postcode_report, publications_table, quote_table};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// Invalid input or a rejected API key.
pub const EXIT_CLIENT_ERROR: i32 = 2;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("publication {0:?} not found")]
    NotFound(String),
}

/// Exit status for a failed command.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    for cause in error.chain() {
        if let Some(error) = cause.downcast_ref::<QuoteError>() {
            return if error.is_client_error() {
                EXIT_CLIENT_ERROR
            } else {
                EXIT_FAILURE
            };
        }
        if cause.is::<AccessError>() || cause.is::<PostcodeError>() || cause.is::<LookupError>()
        {
            return EXIT_CLIENT_ERROR;
        }
    }
    EXIT_FAILURE
}

/// Directory and credentials shared by the lookup commands.
pub struct Session {
    directory: Box<dyn PublicationDirectory>,
    authorizer: Box<dyn Authorizer>,
    api_key: Option<String>,
}

impl Session {
    pub fn new(
        directory: impl PublicationDirectory + 'static,
        authorizer: impl Authorizer + 'static,
        api_key: Option<String>,
    ) -> Self {
        Self {
            directory: Box::new(directory),
            authorizer: Box::new(authorizer),
            api_key,
        }
    }

    /// Loads the config at `config_path` and opens the directory it names,
    /// unless `directory` overrides it.
    pub fn open(
        config_path: &Path,
        directory: Option<&Path>,
        api_key: Option<String>,
    ) -> Result<Self> {
        let config = Config::load(config_path).context("load configuration")?;
        let config_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
        let path: PathBuf = config.directory_path(directory, config_dir);
        let source = FileDirectory::new(&path)
            .with_context(|| format!("open publications directory {}", path.display()))?;
        info!(directory = %path.display(), "using publications directory");
        Ok(Self::new(source, config.api_key_registry(), api_key))
    }

    fn authorize(&self) -> Result<()> {
        let raw = self.api_key.as_deref().unwrap_or_default();
        let key = bearer_token(raw).unwrap_or(raw);
        self.authorizer
            .authorize(key, &Scope::PUBLICATIONS_READ)
            .context("publication lookups need an API key with publications:read")
    }

    fn directory(&self) -> &dyn PublicationDirectory {
        self.directory.as_ref()
    }
}

pub fn run_postcode(raw: &str) -> Result<String> {
    let parts = zeus_postcode::normalize(raw)
        .with_context(|| format!("normalize postcode {:?}", redact_value(raw)))?;
    Ok(postcode_report(&parts))
}

pub fn run_hash_key(key: &str) -> String {
    hash_key(key)
}

pub fn run_publications(session: &Session, args: &PublicationsArgs) -> Result<String> {
    session.authorize()?;
    let span = info_span!("publications", postcode = redact_value(&args.postcode));
    let _guard = span.enter();
    let publications =
        list_publications(session.directory(), &args.postcode).context("list publications")?;
    if args.json {
        return serde_json::to_string_pretty(&publications).context("serialize publications");
    }
    Ok(publications_table(&publications).to_string())
}

pub fn run_quote(session: &Session, args: &QuoteArgs) -> Result<String> {
    session.authorize()?;
    let request = match &args.body {
        Some(body) => QuoteRequest::from_json(body),
        None => QuoteRequest::new(
            args.postcode.as_deref().unwrap_or_default(),
            args.chars.unwrap_or_default(),
        ),
    }
    .context("invalid quote request")?;

    let span = info_span!(
        "quote_command",
        postcode = redact_value(args.postcode.as_deref().unwrap_or_default())
    );
    let _guard = span.enter();
    let quote = quote_publications(session.directory(), &request).context("quote publications")?;
    if args.json {
        return serde_json::to_string_pretty(&quote).context("serialize quote");
    }
    Ok(quote_table(&quote).to_string())
}

pub fn run_publication(session: &Session, id: &str) -> Result<String> {
    session.authorize()?;
    let publication = get_publication(session.directory(), id)
        .context("look up publication")?
        .ok_or_else(|| LookupError::NotFound(id.trim().to_string()))?;
    serde_json::to_string_pretty(&publication).context("serialize publication")
}

pub fn run_batch(session: &Session, ids: &[String]) -> Result<String> {
    session.authorize()?;
    let publications = get_publications(session.directory(), ids).context("look up publications")?;
    serde_json::to_string_pretty(&publications).context("serialize publications")
}

pub fn run_directory(session: &Session, json: bool) -> Result<String> {
    session.authorize()?;
    let publications = all_publications(session.directory()).context("read directory")?;
    if json {
        return serde_json::to_string_pretty(&publications).context("serialize publications");
    }
    Ok(directory_table(&publications).to_string())
}
