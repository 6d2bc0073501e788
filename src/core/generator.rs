use crate::config::{REPOSITORIES_ENV, REQUIRES_ENV};
use crate::core::parser::{parse_repositories, parse_requirements};
use crate::core::render::write_manifest;
use crate::core::ConfigProvider;
use crate::domain::model::Manifest;
use crate::utils::error::Result;
use std::io;

pub struct ManifestGenerator<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ManifestGenerator<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Parse both inputs and assemble the manifest. Fails on the first
    /// malformed entry.
    pub fn build(&self) -> Result<Manifest> {
        let require = parse_requirements(REQUIRES_ENV, self.config.requires())?;
        let repositories = parse_repositories(REPOSITORIES_ENV, self.config.repositories())?;

        tracing::info!(
            "Parsed {} requirement(s), {} repository(ies)",
            require.as_ref().map_or(0, |r| r.items().len()),
            repositories.as_ref().map_or(0, Vec::len)
        );

        Ok(Manifest::new(require, repositories))
    }

    /// Build the manifest and write it to `writer`. Nothing is written when
    /// parsing fails.
    pub fn run<W: io::Write>(&self, writer: &mut W) -> Result<Manifest> {
        let manifest = self.build()?;
        write_manifest(writer, &manifest)?;
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ManifestError;

    struct Fixed(&'static str, &'static str);

    impl ConfigProvider for Fixed {
        fn requires(&self) -> &str {
            self.0
        }

        fn repositories(&self) -> &str {
            self.1
        }
    }

    #[test]
    fn test_build_with_empty_requires() {
        let generator = ManifestGenerator::new(Fixed("", "git:https://x/y.git"));
        let manifest = generator.build().unwrap();
        assert!(manifest.require.is_none());
        assert_eq!(manifest.repositories.unwrap().len(), 1);
    }

    #[test]
    fn test_run_writes_nothing_on_failure() {
        let generator = ManifestGenerator::new(Fixed("a:1", "nocolon"));
        let mut out = Vec::new();
        let err = generator.run(&mut out).unwrap_err();
        assert!(matches!(
            err,
            ManifestError::MalformedEntry { ref field, .. } if field == REPOSITORIES_ENV
        ));
        assert!(out.is_empty());
    }
}
