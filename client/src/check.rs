use crate::env::Env;
use crate::error::CheckError;
use log::{debug, info};
use semver::Version;
use upcheck_common::version::VersionInfo;

#[derive(Debug)]
pub enum Outcome {
    UpToDate {
        current: Version,
    },
    UpdateAvailable {
        current: Version,
        latest: Version,
        info: VersionInfo,
    },
}

impl Outcome {
    pub fn report(&self) -> String {
        match self {
            Outcome::UpToDate { current } => format!("version {current} is up to date"),
            Outcome::UpdateAvailable {
                current,
                latest,
                info,
            } => {
                let mut message = format!(
                    "new version {latest} found (installed {current})\n\n{}\n\ndownload: {}",
                    info.display_msg(),
                    info.update_url
                );
                if info.force_update {
                    message.push_str("\n\nthe installed version is no longer supported, update now");
                }
                message
            }
        }
    }
}

/// 0 when up to date, 1 when an update is due, 2 when the check could not run.
pub fn exit_status(result: &Result<Outcome, CheckError>) -> u8 {
    match result {
        Ok(Outcome::UpToDate { .. }) => 0,
        Ok(Outcome::UpdateAvailable { .. }) => 1,
        Err(_) => 2,
    }
}

pub fn parse_version(raw: &str) -> Result<Version, CheckError> {
    Version::parse(raw.trim()).map_err(|source| CheckError::InvalidVersion {
        version: raw.to_string(),
        source,
    })
}

/// Compares advertised and installed versions by semver precedence.
pub fn evaluate(current: &str, info: VersionInfo) -> Result<Outcome, CheckError> {
    let current = parse_version(current)?;
    let latest = parse_version(&info.version)?;

    if latest > current {
        Ok(Outcome::UpdateAvailable {
            current,
            latest,
            info,
        })
    } else {
        Ok(Outcome::UpToDate { current })
    }
}

pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<VersionInfo, CheckError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CheckError::Status(status.as_u16()));
    }

    let info = response.json::<VersionInfo>().await?;
    debug!("version server advertises {}", info.version);
    Ok(info)
}

pub async fn run(config: &Env) -> Result<Outcome, CheckError> {
    info!("checking for updates at {}", config.version_api);

    let client = reqwest::Client::builder()
        .timeout(config.check_timeout())
        .build()?;

    let info = fetch(&client, &config.version_api).await?;
    evaluate(config.current_version(), info)
}
