//! Cover resolver - runs the source chain and normalizes the winner.
//!
//! Folder mode tries the staged cover file, then the remote lookup. Track
//! mode only tries the remote lookup. The first source that yields bytes
//! ends the chain; if those bytes don't decode, the placeholder is used
//! rather than falling through to later sources. An empty staged cover
//! yields no bytes and so does not end the chain.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::lookup::{ArtworkLookup, SearchQuery};
use crate::metadata::{self, TrackTags};
use crate::scanner::FolderJob;

use super::normalize::{normalize, placeholder};
use super::sidecar::load_local_cover;
use super::{Artwork, Provenance};

/// One candidate-producing source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    LocalFile,
    Remote,
}

const FOLDER_CHAIN: &[Strategy] = &[Strategy::LocalFile, Strategy::Remote];
const TRACK_CHAIN: &[Strategy] = &[Strategy::Remote];

/// What the chain is resolving artwork for
enum Target<'a> {
    Folder(&'a FolderJob),
    Track(&'a SearchQuery),
}

/// Raw bytes from a source, before normalization
struct Candidate {
    data: Vec<u8>,
    source: Provenance,
}

/// Resolves artwork for folders and single tracks.
pub struct CoverResolver {
    lookup: ArtworkLookup,
    config: Config,
    /// Encoded placeholder, built once per run
    fallback: Vec<u8>,
}

impl CoverResolver {
    pub fn new(lookup: ArtworkLookup, config: Config) -> Result<Self> {
        let fallback = placeholder(&config)?;
        Ok(Self {
            lookup,
            config,
            fallback,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve one artwork for a whole folder.
    pub async fn resolve_folder(&self, job: &FolderJob) -> Artwork {
        self.run_chain(FOLDER_CHAIN, Target::Folder(job)).await
    }

    /// Resolve artwork for a single track.
    pub async fn resolve_track(&self, query: &SearchQuery) -> Artwork {
        self.run_chain(TRACK_CHAIN, Target::Track(query)).await
    }

    /// The generated fallback artwork
    pub fn placeholder(&self) -> Artwork {
        Artwork {
            data: self.fallback.clone(),
            source: Provenance::Generated,
            staged: None,
        }
    }

    async fn run_chain(&self, chain: &[Strategy], target: Target<'_>) -> Artwork {
        for strategy in chain {
            if let Some(candidate) = self.try_strategy(*strategy, &target).await {
                return self.finish(candidate);
            }
        }
        self.placeholder()
    }

    fn finish(&self, candidate: Candidate) -> Artwork {
        let staged = match &candidate.source {
            Provenance::Local(path) => Some(path.clone()),
            _ => None,
        };
        match normalize(&candidate.data, &self.config) {
            Ok(data) => Artwork {
                data,
                source: candidate.source,
                staged,
            },
            Err(e) => {
                println!("  Failed to process image: {}", e);
                Artwork {
                    staged,
                    ..self.placeholder()
                }
            }
        }
    }

    async fn try_strategy(&self, strategy: Strategy, target: &Target<'_>) -> Option<Candidate> {
        match (strategy, target) {
            (Strategy::LocalFile, Target::Folder(job)) => {
                let name = &self.config.cover_filename;
                println!("Looking for {}...", name);
                match load_local_cover(&job.folder, name) {
                    Some((path, data)) => {
                        println!("Found {}, using local artwork", name);
                        Some(Candidate {
                            data,
                            source: Provenance::Local(path),
                        })
                    }
                    None => {
                        println!("No {} found, searching online...", name);
                        None
                    }
                }
            }
            (Strategy::LocalFile, Target::Track(_)) => None,
            (Strategy::Remote, Target::Folder(job)) => {
                let query = folder_query(job);
                println!("Searching for: {}", query);
                let candidate = self.fetch_remote(&query).await;
                if candidate.is_some() {
                    println!("Found artwork online, resizing...");
                }
                candidate
            }
            (Strategy::Remote, Target::Track(query)) => self.fetch_remote(query).await,
        }
    }

    async fn fetch_remote(&self, query: &SearchQuery) -> Option<Candidate> {
        match self.lookup.find_cover(query).await {
            Ok(cover) => Some(Candidate {
                data: cover.data,
                source: Provenance::Remote {
                    release_id: cover.release_id,
                },
            }),
            Err(e) => {
                tracing::debug!("Remote lookup for {:?} failed: {}", query, e);
                None
            }
        }
    }
}

/// Search terms for a folder, taken from its first file.
///
/// Priority: album tag, then title tag, then the folder name. The artist tag
/// rides along with album or title but never with the folder name.
pub fn folder_query(job: &FolderJob) -> SearchQuery {
    let by_folder_name = || SearchQuery::new(job.folder_name(), None);

    let Some(first) = job.files.first() else {
        return by_folder_name();
    };

    match metadata::read(first) {
        Ok(TrackTags {
            title,
            artist,
            album,
        }) => {
            let non_blank = |s: &String| !s.trim().is_empty();
            match album.filter(non_blank).or(title.filter(non_blank)) {
                Some(name) => SearchQuery::new(Some(name), artist),
                None => by_folder_name(),
            }
        }
        Err(e) => {
            println!("Could not read metadata, using folder name");
            tracing::debug!("Reading {:?} failed: {}", first, e);
            by_folder_name()
        }
    }
}

/// Search terms for one track: its title/artist tags, or its file name.
///
/// The file name is only parsed when both tags are missing.
pub fn track_query(path: &Path, tags: &TrackTags) -> SearchQuery {
    let query = SearchQuery::new(tags.title.clone(), tags.artist.clone());
    if !query.is_empty() {
        return query;
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    SearchQuery::from_file_stem(&stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupError;
    use crate::lookup::traits::mocks::{MockCoverArt, MockMusicBrainz};
    use crate::test_utils::{jpeg_fixture, tagged_wav, wav_config, write_silent_wav};
    use image::GenericImageView;
    use tempfile::tempdir;

    fn resolver(mb: MockMusicBrainz, caa: MockCoverArt) -> CoverResolver {
        CoverResolver::new(ArtworkLookup::new(Box::new(mb), Box::new(caa)), wav_config()).unwrap()
    }

    #[tokio::test]
    async fn test_local_cover_skips_remote() {
        let dir = tempdir().unwrap();
        tagged_wav(dir.path(), "song1.wav", Some("Song"), Some("Band"), Some("Album"));
        std::fs::write(dir.path().join("cover.jpg"), jpeg_fixture(800, 800)).unwrap();

        let mb = MockMusicBrainz::with_release("release-1");
        let caa = MockCoverArt::with_image(jpeg_fixture(100, 100));
        let (mb_calls, caa_calls) = (mb.calls.clone(), caa.calls.clone());
        let resolver = resolver(mb, caa);

        let job = FolderJob::scan(dir.path(), resolver.config()).unwrap();
        let art = resolver.resolve_folder(&job).await;

        assert_eq!(art.source, Provenance::Local(dir.path().join("cover.jpg")));
        assert_eq!(image::load_from_memory(&art.data).unwrap().dimensions(), (512, 512));
        assert_eq!(mb_calls.get(), 0);
        assert_eq!(caa_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_undecodable_local_cover_uses_placeholder_without_remote() {
        let dir = tempdir().unwrap();
        write_silent_wav(&dir.path().join("song1.wav"));
        std::fs::write(dir.path().join("cover.jpg"), b"not really a jpeg").unwrap();

        let mb = MockMusicBrainz::with_release("release-1");
        let mb_calls = mb.calls.clone();
        let resolver = resolver(mb, MockCoverArt::with_image(jpeg_fixture(10, 10)));

        let job = FolderJob::scan(dir.path(), resolver.config()).unwrap();
        let art = resolver.resolve_folder(&job).await;

        assert!(art.is_placeholder());
        assert_eq!(art.staged_cover(), Some(&dir.path().join("cover.jpg")));
        assert_eq!(mb_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_empty_local_cover_falls_through_to_remote() {
        let dir = tempdir().unwrap();
        tagged_wav(dir.path(), "song1.wav", Some("Song"), None, Some("Album"));
        std::fs::write(dir.path().join("cover.jpg"), b"").unwrap();

        let mb = MockMusicBrainz::with_release("release-1");
        let caa = MockCoverArt::with_image(jpeg_fixture(64, 64));
        let (mb_calls, caa_calls) = (mb.calls.clone(), caa.calls.clone());
        let resolver = resolver(mb, caa);

        let job = FolderJob::scan(dir.path(), resolver.config()).unwrap();
        let art = resolver.resolve_folder(&job).await;

        assert!(matches!(art.source, Provenance::Remote { .. }));
        assert_eq!(art.staged_cover(), None);
        assert_eq!(mb_calls.get(), 1);
        assert_eq!(caa_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_remote_cover_for_folder() {
        let dir = tempdir().unwrap();
        tagged_wav(dir.path(), "a.wav", Some("Iron Man"), Some("Black Sabbath"), Some("Paranoid"));
        tagged_wav(dir.path(), "b.wav", Some("War Pigs"), Some("Black Sabbath"), Some("Paranoid"));

        let mb = MockMusicBrainz::with_release("release-1");
        let caa = MockCoverArt::with_image(jpeg_fixture(1000, 500));
        let (mb_calls, caa_calls, queries) = (mb.calls.clone(), caa.calls.clone(), mb.queries.clone());
        let resolver = resolver(mb, caa);

        let job = FolderJob::scan(dir.path(), resolver.config()).unwrap();
        let art = resolver.resolve_folder(&job).await;

        assert_eq!(
            art.source,
            Provenance::Remote {
                release_id: "release-1".into()
            }
        );
        assert_eq!(image::load_from_memory(&art.data).unwrap().dimensions(), (512, 256));
        assert_eq!(mb_calls.get(), 1);
        assert_eq!(caa_calls.get(), 1);
        // Album of the first file wins over its title
        assert_eq!(
            queries.lock().unwrap()[0],
            SearchQuery::new(Some("Paranoid".into()), Some("Black Sabbath".into()))
        );
    }

    #[tokio::test]
    async fn test_no_release_means_no_cover_fetch() {
        let dir = tempdir().unwrap();
        tagged_wav(dir.path(), "a.wav", Some("Obscure"), None, None);

        let mb = MockMusicBrainz::no_matches();
        let caa = MockCoverArt::with_image(jpeg_fixture(10, 10));
        let (mb_calls, caa_calls) = (mb.calls.clone(), caa.calls.clone());
        let resolver = resolver(mb, caa);

        let job = FolderJob::scan(dir.path(), resolver.config()).unwrap();
        let art = resolver.resolve_folder(&job).await;

        assert!(art.is_placeholder());
        assert_eq!(mb_calls.get(), 1);
        assert_eq!(caa_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_undecodable_remote_cover_uses_placeholder() {
        let resolver = resolver(
            MockMusicBrainz::with_release("release-1"),
            MockCoverArt::with_image(b"<html>not an image</html>".to_vec()),
        );
        let art = resolver
            .resolve_track(&SearchQuery::new(Some("Song".into()), None))
            .await;
        assert!(art.is_placeholder());
        assert!(!art.data.is_empty());
    }

    #[tokio::test]
    async fn test_track_lookup_failure_uses_placeholder() {
        let resolver = resolver(
            MockMusicBrainz::with_error(LookupError::Network("timed out".into())),
            MockCoverArt::with_image(jpeg_fixture(10, 10)),
        );
        let art = resolver
            .resolve_track(&SearchQuery::new(Some("Song".into()), None))
            .await;
        assert!(art.is_placeholder());
    }

    #[tokio::test]
    async fn test_track_mode_ignores_local_cover() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("cover.jpg"), jpeg_fixture(64, 64)).unwrap();

        let mb = MockMusicBrainz::with_release("release-9");
        let mb_calls = mb.calls.clone();
        let resolver = resolver(mb, MockCoverArt::with_image(jpeg_fixture(32, 32)));

        let art = resolver
            .resolve_track(&SearchQuery::new(Some("Song".into()), None))
            .await;

        assert!(matches!(art.source, Provenance::Remote { .. }));
        assert_eq!(mb_calls.get(), 1);
    }

    #[test]
    fn test_folder_query_prefers_title_without_album() {
        let dir = tempdir().unwrap();
        tagged_wav(dir.path(), "a.wav", Some("Iron Man"), Some("Black Sabbath"), None);

        let job = FolderJob::scan(dir.path(), &wav_config()).unwrap();
        assert_eq!(
            folder_query(&job),
            SearchQuery::new(Some("Iron Man".into()), Some("Black Sabbath".into()))
        );
    }

    #[test]
    fn test_folder_query_falls_back_to_folder_name() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("Master of Reality");
        std::fs::create_dir(&folder).unwrap();
        // Artist alone is not enough to search by
        tagged_wav(&folder, "a.wav", None, Some("Black Sabbath"), None);

        let job = FolderJob::scan(&folder, &wav_config()).unwrap();
        assert_eq!(
            folder_query(&job),
            SearchQuery::new(Some("Master of Reality".into()), None)
        );
    }

    #[test]
    fn test_folder_query_unreadable_file() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("Vol 4");
        std::fs::create_dir(&folder).unwrap();
        std::fs::write(folder.join("broken.wav"), b"garbage").unwrap();

        let job = FolderJob::scan(&folder, &wav_config()).unwrap();
        assert_eq!(folder_query(&job), SearchQuery::new(Some("Vol 4".into()), None));
    }

    #[test]
    fn test_track_query_uses_tags() {
        let tags = TrackTags {
            title: Some("Paranoid".into()),
            artist: None,
            album: Some("ignored".into()),
        };
        assert_eq!(
            track_query(Path::new("/x/Whatever - Else.m4a"), &tags),
            SearchQuery::new(Some("Paranoid".into()), None)
        );
    }

    #[test]
    fn test_track_query_parses_file_name() {
        let query = track_query(Path::new("/music/Y/Title - Artist.m4a"), &TrackTags::default());
        assert_eq!(query.title.as_deref(), Some("Title"));
        assert_eq!(query.artist.as_deref(), Some("Artist"));
    }
}
