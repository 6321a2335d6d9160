use serde::Deserialize;
use url::Url;

use super::result::{GithubError, GithubResult};

/**
    Metadata for one published release, as returned by the GitHub API.

    Only the fields consumed by the download flow are modeled,
    everything else in the payload is ignored during decoding.
*/
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRelease {
    pub tag_name: String,
    pub assets: Vec<GithubAsset>,
}

/**
    A single downloadable file attached to a release.
*/
#[derive(Debug, Clone, Deserialize)]
pub struct GithubAsset {
    pub name: String,
    pub browser_download_url: Url,
}

impl GithubRelease {
    /**
        Finds the first asset whose published file name is
        exactly equal to the given name.

        Asset names are assumed to be unique within a release, but this
        is not enforced by the API - the first match wins.

        # Errors

        - If no asset in the release matches the given name.
    */
    pub fn find_asset(&self, name: impl AsRef<str>) -> GithubResult<&GithubAsset> {
        let name = name.as_ref();
        self.assets
            .iter()
            .find(|asset| asset.name == name)
            .ok_or_else(|| GithubError::AssetNotFound {
                name: name.to_string(),
                tag: self.tag_name.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down version of a real release payload, with
    // some of the fields we do not consume left in.
    const RELEASE_JSON: &str = r#"{
        "url": "https://api.github.com/repos/acme/widget/releases/1",
        "assets_url": "https://api.github.com/repos/acme/widget/releases/1/assets",
        "tag_name": "v1.2.0",
        "name": "v1.2.0",
        "draft": false,
        "prerelease": false,
        "assets": [
            {
                "id": 101,
                "name": "widget-x86_64-linux.tar.gz",
                "size": 123456,
                "browser_download_url": "https://github.com/acme/widget/releases/download/v1.2.0/widget-x86_64-linux.tar.gz"
            },
            {
                "id": 102,
                "name": "widget.jar",
                "size": 654321,
                "browser_download_url": "https://github.com/acme/widget/releases/download/v1.2.0/widget.jar"
            }
        ]
    }"#;

    fn new_asset(name: &str, url: &str) -> GithubAsset {
        GithubAsset {
            name: name.to_string(),
            browser_download_url: url.parse().unwrap(),
        }
    }

    #[test]
    fn decode_release_payload() {
        let release: GithubRelease = serde_json::from_str(RELEASE_JSON).unwrap();
        assert_eq!(release.tag_name, "v1.2.0");
        assert_eq!(release.assets.len(), 2);
        assert_eq!(release.assets[0].name, "widget-x86_64-linux.tar.gz");
        assert_eq!(release.assets[1].name, "widget.jar");
    }

    #[test]
    fn decode_missing_fields_fails() {
        // No tag_name
        let result = serde_json::from_str::<GithubRelease>(r#"{"assets": []}"#);
        assert!(result.is_err());
        // No assets
        let result = serde_json::from_str::<GithubRelease>(r#"{"tag_name": "v1.0.0"}"#);
        assert!(result.is_err());
        // Asset without a download url
        let result = serde_json::from_str::<GithubRelease>(
            r#"{"tag_name": "v1.0.0", "assets": [{"name": "a.jar"}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn decode_non_json_body_fails() {
        let error: GithubError = serde_json::from_slice::<GithubRelease>(b"<!DOCTYPE html>")
            .unwrap_err()
            .into();
        assert!(matches!(error, GithubError::Decode(_)));
    }

    #[test]
    fn find_asset_any_position() {
        let release: GithubRelease = serde_json::from_str(RELEASE_JSON).unwrap();

        let first = release.find_asset("widget-x86_64-linux.tar.gz").unwrap();
        assert_eq!(
            first.browser_download_url.as_str(),
            "https://github.com/acme/widget/releases/download/v1.2.0/widget-x86_64-linux.tar.gz"
        );

        let last = release.find_asset("widget.jar").unwrap();
        assert_eq!(
            last.browser_download_url.as_str(),
            "https://github.com/acme/widget/releases/download/v1.2.0/widget.jar"
        );
    }

    #[test]
    fn find_asset_first_match_wins() {
        let release = GithubRelease {
            tag_name: "v1.0.0".to_string(),
            assets: vec![
                new_asset("dup.bin", "https://example.com/first"),
                new_asset("dup.bin", "https://example.com/second"),
            ],
        };

        let asset = release.find_asset("dup.bin").unwrap();
        assert_eq!(asset.browser_download_url.as_str(), "https://example.com/first");
    }

    #[test]
    fn find_asset_missing() {
        let release: GithubRelease = serde_json::from_str(RELEASE_JSON).unwrap();

        let error = release.find_asset("nonexistent.zip").unwrap_err();
        assert!(matches!(
            error,
            GithubError::AssetNotFound { ref name, ref tag }
                if name == "nonexistent.zip" && tag == "v1.2.0"
        ));
    }
}
