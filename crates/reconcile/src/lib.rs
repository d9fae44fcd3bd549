//! Gitplane reconciliation ops: late-initialize declared parameters from an
//! observed repository, build the desired record, decide up-to-dateness, and
//! project a read-only observation.
//!
//! Every operation here is pure and synchronous; fetching and writing the
//! external repository belongs to a [`RepositoriesService`] implementation
//! driven by the surrounding control loop.

#![forbid(unsafe_code)]

use gitplane_core::{Repository, RepositoryObservation, RepositoryParameters};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use tracing::debug;

/// Fields excluded from the up-to-date comparison.
///
/// `auto_init` is accepted by the API on create only and is not reflected
/// consistently on reads, so a declared value for it must never register as
/// drift.
pub const EXCLUDED_FIELDS: &[&str] = &["auto_init"];

/// Failure to isolate the observed record for merge/comparison.
///
/// Both variants are programming-invariant violations rather than transient
/// conditions; callers should treat the check as inconclusive, surface the
/// error, and retry on the next cycle.
#[derive(Debug, thiserror::Error)]
pub enum CloneError {
    /// Serializing the observed repository failed.
    #[error("snapshotting observed repository: {0}")]
    Snapshot(serde_json::Error),
    /// The snapshot no longer deserializes as a repository record.
    #[error("cloned repository has unexpected shape: {0}")]
    Shape(serde_json::Error),
}

/// Produce a fully independent copy of `observed` via a serialize/deserialize
/// round trip. No sub-structure (owner, organization, topics, permissions) is
/// shared with the source, so the merge path never needs to lock against it.
pub fn clone_repository(observed: &Repository) -> Result<Repository, CloneError> {
    let value = serde_json::to_value(observed).map_err(CloneError::Snapshot)?;
    serde_json::from_value(value).map_err(CloneError::Shape)
}

/// Overlay every explicitly-set declared field onto `r`, yielding the desired
/// record. Unset declared fields leave the observed value untouched; fields
/// with no declared counterpart are never written. The baseline is taken by
/// value, so the caller's observed snapshot cannot be mutated through here.
///
/// `name` is the one field where emptiness, not nullability, signals absence:
/// an empty declared name never erases the observed name.
pub fn override_parameters(rp: &RepositoryParameters, mut r: Repository) -> Repository {
    if !rp.name.is_empty() {
        r.name = Some(rp.name.clone());
    }
    if rp.description.is_some() {
        r.description = rp.description.clone();
    }
    if rp.homepage.is_some() {
        r.homepage = rp.homepage.clone();
    }
    if rp.private.is_some() {
        r.private = rp.private;
    }
    if rp.visibility.is_some() {
        r.visibility = rp.visibility.clone();
    }
    if rp.has_issues.is_some() {
        r.has_issues = rp.has_issues;
    }
    if rp.has_projects.is_some() {
        r.has_projects = rp.has_projects;
    }
    if rp.has_wiki.is_some() {
        r.has_wiki = rp.has_wiki;
    }
    if rp.auto_init.is_some() {
        r.auto_init = rp.auto_init;
    }
    if rp.is_template.is_some() {
        r.is_template = rp.is_template;
    }
    if rp.team_id.is_some() {
        r.team_id = rp.team_id;
    }
    if rp.gitignore_template.is_some() {
        r.gitignore_template = rp.gitignore_template.clone();
    }
    if rp.license_template.is_some() {
        r.license_template = rp.license_template.clone();
    }
    if rp.allow_squash_merge.is_some() {
        r.allow_squash_merge = rp.allow_squash_merge;
    }
    if rp.allow_merge_commit.is_some() {
        r.allow_merge_commit = rp.allow_merge_commit;
    }
    if rp.allow_rebase_merge.is_some() {
        r.allow_rebase_merge = rp.allow_rebase_merge;
    }
    if rp.delete_branch_on_merge.is_some() {
        r.delete_branch_on_merge = rp.delete_branch_on_merge;
    }
    if rp.has_pages.is_some() {
        r.has_pages = rp.has_pages;
    }
    if rp.has_downloads.is_some() {
        r.has_downloads = rp.has_downloads;
    }
    if rp.default_branch.is_some() {
        r.default_branch = rp.default_branch.clone();
    }
    if rp.archived.is_some() {
        r.archived = rp.archived;
    }
    r
}

/// Serialize `r` for comparison, with excluded fields stripped from the
/// top-level object.
fn comparable(r: &Repository) -> Result<Json, CloneError> {
    let mut v = serde_json::to_value(r).map_err(CloneError::Snapshot)?;
    if let Some(obj) = v.as_object_mut() {
        for field in EXCLUDED_FIELDS {
            obj.remove(*field);
        }
    }
    Ok(v)
}

/// Check whether `observed` already matches the state declared by `rp`.
///
/// The observed record is cloned, the declared fields are overlaid onto the
/// clone, and the result is compared structurally against the unmodified
/// observed record with
/// [`EXCLUDED_FIELDS`] stripped. Nested records compare recursively, lists by
/// ordered element equality, the permission map by key/value regardless of
/// order. An empty declaration therefore always reports up to date.
///
/// On `Err` the check is inconclusive: treat the resource as converged for
/// this cycle and surface the error, so an internal fault can never trigger a
/// spurious update.
pub fn is_up_to_date(
    rp: &RepositoryParameters,
    observed: &Repository,
) -> Result<bool, CloneError> {
    let clone = clone_repository(observed)?;
    let desired = override_parameters(rp, clone);
    let up_to_date = comparable(&desired)? == comparable(observed)?;
    debug!(
        repository = observed.full_name.as_deref().unwrap_or(""),
        up_to_date, "compared desired state against observed"
    );
    Ok(up_to_date)
}

fn owner_kind(r: &Repository) -> Option<&str> {
    r.owner.as_ref().and_then(|o| o.kind.as_deref())
}

/// Fill the unset fields of `rp` from `observed`. A field already set in `rp`
/// is never overwritten, even when the observed value differs; nothing is
/// ever cleared.
///
/// `organization` is inferred only when it is unset, the observed owner is an
/// organization, and the observed organization sub-record carries a login.
/// A missing owner or organization sub-record means no inference.
pub fn late_initialize(rp: &mut RepositoryParameters, observed: &Repository) {
    if rp.organization.is_none() && owner_kind(observed) == Some("Organization") {
        if let Some(login) = observed.organization.as_ref().and_then(|o| o.login.clone()) {
            rp.organization = Some(login);
        }
    }
    if rp.description.is_none() && observed.description.is_some() {
        rp.description = observed.description.clone();
    }
    if rp.homepage.is_none() && observed.homepage.is_some() {
        rp.homepage = observed.homepage.clone();
    }
    if rp.private.is_none() && observed.private.is_some() {
        rp.private = observed.private;
    }
    if rp.visibility.is_none() && observed.visibility.is_some() {
        rp.visibility = observed.visibility.clone();
    }
    if rp.has_issues.is_none() && observed.has_issues.is_some() {
        rp.has_issues = observed.has_issues;
    }
    if rp.has_projects.is_none() && observed.has_projects.is_some() {
        rp.has_projects = observed.has_projects;
    }
    if rp.has_wiki.is_none() && observed.has_wiki.is_some() {
        rp.has_wiki = observed.has_wiki;
    }
    if rp.is_template.is_none() && observed.is_template.is_some() {
        rp.is_template = observed.is_template;
    }
    if rp.team_id.is_none() && observed.team_id.is_some() {
        rp.team_id = observed.team_id;
    }
    if rp.auto_init.is_none() && observed.auto_init.is_some() {
        rp.auto_init = observed.auto_init;
    }
    if rp.gitignore_template.is_none() && observed.gitignore_template.is_some() {
        rp.gitignore_template = observed.gitignore_template.clone();
    }
    if rp.license_template.is_none() && observed.license_template.is_some() {
        rp.license_template = observed.license_template.clone();
    }
    if rp.allow_squash_merge.is_none() && observed.allow_squash_merge.is_some() {
        rp.allow_squash_merge = observed.allow_squash_merge;
    }
    if rp.allow_merge_commit.is_none() && observed.allow_merge_commit.is_some() {
        rp.allow_merge_commit = observed.allow_merge_commit;
    }
    if rp.allow_rebase_merge.is_none() && observed.allow_rebase_merge.is_some() {
        rp.allow_rebase_merge = observed.allow_rebase_merge;
    }
    if rp.delete_branch_on_merge.is_none() && observed.delete_branch_on_merge.is_some() {
        rp.delete_branch_on_merge = observed.delete_branch_on_merge;
    }
    if rp.has_pages.is_none() && observed.has_pages.is_some() {
        rp.has_pages = observed.has_pages;
    }
    if rp.has_downloads.is_none() && observed.has_downloads.is_some() {
        rp.has_downloads = observed.has_downloads;
    }
    if rp.default_branch.is_none() && observed.default_branch.is_some() {
        rp.default_branch = observed.default_branch.clone();
    }
    if rp.archived.is_none() && observed.archived.is_some() {
        rp.archived = observed.archived;
    }
}

fn str_value(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

fn i64_value(v: &Option<i64>) -> i64 {
    v.unwrap_or_default()
}

fn bool_value(v: &Option<bool>) -> bool {
    v.unwrap_or_default()
}

/// Project the status-relevant subset of `r` into a fresh observation record.
///
/// Total: missing source fields degrade to the field type's zero value. The
/// topic list and permission map are freshly allocated, never aliased with
/// the source; permissions stay absent when the source never reported them.
pub fn generate_observation(r: &Repository) -> RepositoryObservation {
    RepositoryObservation {
        id: i64_value(&r.id),
        node_id: str_value(&r.node_id),
        name: str_value(&r.name),
        full_name: str_value(&r.full_name),
        url: str_value(&r.url),
        html_url: str_value(&r.html_url),
        archive_url: str_value(&r.archive_url),
        assignees_url: str_value(&r.assignees_url),
        blobs_url: str_value(&r.blobs_url),
        clone_url: str_value(&r.clone_url),
        collaborators_url: str_value(&r.collaborators_url),
        comments_url: str_value(&r.comments_url),
        commits_url: str_value(&r.commits_url),
        compare_url: str_value(&r.compare_url),
        contents_url: str_value(&r.contents_url),
        contributors_url: str_value(&r.contributors_url),
        deployments_url: str_value(&r.deployments_url),
        downloads_url: str_value(&r.downloads_url),
        events_url: str_value(&r.events_url),
        forks_url: str_value(&r.forks_url),
        git_url: str_value(&r.git_url),
        git_commits_url: str_value(&r.git_commits_url),
        git_refs_url: str_value(&r.git_refs_url),
        git_tags_url: str_value(&r.git_tags_url),
        hooks_url: str_value(&r.hooks_url),
        issue_comment_url: str_value(&r.issue_comment_url),
        issue_events_url: str_value(&r.issue_events_url),
        issues_url: str_value(&r.issues_url),
        keys_url: str_value(&r.keys_url),
        labels_url: str_value(&r.labels_url),
        languages_url: str_value(&r.languages_url),
        merges_url: str_value(&r.merges_url),
        milestones_url: str_value(&r.milestones_url),
        mirror_url: str_value(&r.mirror_url),
        notifications_url: str_value(&r.notifications_url),
        pulls_url: str_value(&r.pulls_url),
        releases_url: str_value(&r.releases_url),
        ssh_url: str_value(&r.ssh_url),
        stargazers_url: str_value(&r.stargazers_url),
        statuses_url: str_value(&r.statuses_url),
        subscribers_url: str_value(&r.subscribers_url),
        subscription_url: str_value(&r.subscription_url),
        svn_url: str_value(&r.svn_url),
        tags_url: str_value(&r.tags_url),
        teams_url: str_value(&r.teams_url),
        trees_url: str_value(&r.trees_url),
        forks_count: i64_value(&r.forks_count),
        network_count: i64_value(&r.network_count),
        open_issues_count: i64_value(&r.open_issues_count),
        stargazers_count: i64_value(&r.stargazers_count),
        subscribers_count: i64_value(&r.subscribers_count),
        watchers_count: i64_value(&r.watchers_count),
        size: i64_value(&r.size),
        language: str_value(&r.language),
        fork: bool_value(&r.fork),
        disabled: bool_value(&r.disabled),
        created_at: r.created_at,
        pushed_at: r.pushed_at,
        updated_at: r.updated_at,
        topics: r.topics.clone().unwrap_or_default(),
        permissions: r.permissions.clone(),
    }
}

/// Errors a [`RepositoriesService`] implementation reports, suitable for
/// transport across process boundaries.
#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
pub enum ClientError {
    #[error("not_found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("rate_limited: {0}")]
    RateLimited(String),
    #[error("internal: {0}")]
    Internal(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Repository operations the reconciliation control loop sequences around the
/// pure ops above. Implementations own the transport and credentials; this
/// crate performs no I/O itself.
#[async_trait::async_trait]
pub trait RepositoriesService: Send + Sync {
    /// Fetch the current observed record for `owner/name`.
    async fn get(&self, owner: &str, name: &str) -> ClientResult<Repository>;

    /// Create a repository under `org` (or the authenticated user when `org`
    /// is empty).
    async fn create(&self, org: &str, repo: &Repository) -> ClientResult<Repository>;

    /// Update `owner/name` to match `repo`; returns the refreshed record.
    async fn edit(&self, owner: &str, name: &str, repo: &Repository) -> ClientResult<Repository>;

    async fn delete(&self, owner: &str, name: &str) -> ClientResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn observed() -> Repository {
        serde_json::from_value(serde_json::json!({
            "id": 1296269,
            "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
            "name": "hello-world",
            "full_name": "acme/hello-world",
            "owner": { "login": "acme", "type": "Organization" },
            "organization": { "login": "acme" },
            "description": "example repository",
            "private": false,
            "visibility": "public",
            "has_issues": true,
            "has_wiki": true,
            "default_branch": "main",
            "archived": false,
            "fork": false,
            "language": "Rust",
            "size": 108,
            "forks_count": 9,
            "open_issues_count": 2,
            "stargazers_count": 80,
            "watchers_count": 80,
            "created_at": "2011-01-26T19:01:12Z",
            "pushed_at": "2021-01-26T19:06:43Z",
            "updated_at": "2021-01-26T19:14:43Z",
            "url": "https://api.github.com/repos/acme/hello-world",
            "html_url": "https://github.com/acme/hello-world",
            "clone_url": "https://github.com/acme/hello-world.git",
            "ssh_url": "git@github.com:acme/hello-world.git",
            "topics": ["rust", "tooling"],
            "permissions": { "admin": true, "push": true, "pull": true }
        }))
        .unwrap()
    }

    #[test]
    fn clone_is_independent_of_source() {
        let source = observed();
        let mut clone = clone_repository(&source).unwrap();
        assert_eq!(clone, source);

        clone.topics.as_mut().unwrap().push("injected".into());
        clone.owner.as_mut().unwrap().login = Some("intruder".into());
        assert_eq!(source.topics.as_ref().unwrap().len(), 2);
        assert_eq!(source.owner.as_ref().unwrap().login.as_deref(), Some("acme"));
    }

    #[test]
    fn override_applies_only_declared_fields() {
        let rp = RepositoryParameters {
            private: Some(true),
            has_wiki: Some(false),
            ..Default::default()
        };
        let desired = override_parameters(&rp, observed());
        assert_eq!(desired.private, Some(true));
        assert_eq!(desired.has_wiki, Some(false));
        // Everything without a declared opinion keeps the observed value.
        assert_eq!(desired.name.as_deref(), Some("hello-world"));
        assert_eq!(desired.has_issues, Some(true));
        assert_eq!(desired.stargazers_count, Some(80));
    }

    #[test]
    fn override_empty_name_keeps_observed_name() {
        let rp = RepositoryParameters { description: Some("new".into()), ..Default::default() };
        let desired = override_parameters(&rp, observed());
        assert_eq!(desired.name.as_deref(), Some("hello-world"));
        assert_eq!(desired.description.as_deref(), Some("new"));

        let renamed = RepositoryParameters { name: "renamed".into(), ..Default::default() };
        assert_eq!(override_parameters(&renamed, observed()).name.as_deref(), Some("renamed"));
    }

    #[test]
    fn override_is_idempotent() {
        let rp = RepositoryParameters {
            name: "hello-world".into(),
            private: Some(true),
            visibility: Some("private".into()),
            default_branch: Some("trunk".into()),
            ..Default::default()
        };
        let once = override_parameters(&rp, observed());
        let twice = override_parameters(&rp, once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_declaration_is_always_up_to_date() {
        let rp = RepositoryParameters::default();
        assert!(is_up_to_date(&rp, &observed()).unwrap());
    }

    #[test]
    fn declared_drift_reports_stale() {
        let rp = RepositoryParameters {
            private: Some(true),
            has_wiki: Some(false),
            ..Default::default()
        };
        let source = observed();
        assert!(!is_up_to_date(&rp, &source).unwrap());
        // The check works on a clone; the caller's snapshot stays untouched.
        assert_eq!(source, observed());
    }

    #[test]
    fn matching_declaration_is_up_to_date() {
        let rp = RepositoryParameters {
            name: "hello-world".into(),
            private: Some(false),
            has_wiki: Some(true),
            default_branch: Some("main".into()),
            ..Default::default()
        };
        assert!(is_up_to_date(&rp, &observed()).unwrap());
    }

    #[test]
    fn auto_init_divergence_is_ignored() {
        assert!(EXCLUDED_FIELDS.contains(&"auto_init"));
        // Declared on a record the API never reported it for: still converged.
        let rp = RepositoryParameters { auto_init: Some(true), ..Default::default() };
        assert!(is_up_to_date(&rp, &observed()).unwrap());
    }

    #[test]
    fn late_initialize_fills_only_unset_fields() {
        let mut rp = RepositoryParameters {
            name: "hello-world".into(),
            description: Some("keep this".into()),
            ..Default::default()
        };
        late_initialize(&mut rp, &observed());
        // Previously set fields survive even though the observed value differs.
        assert_eq!(rp.description.as_deref(), Some("keep this"));
        // Gaps are filled from the observation.
        assert_eq!(rp.private, Some(false));
        assert_eq!(rp.visibility.as_deref(), Some("public"));
        assert_eq!(rp.has_wiki, Some(true));
        assert_eq!(rp.default_branch.as_deref(), Some("main"));
        assert_eq!(rp.archived, Some(false));
        // Fields the observation does not carry stay unset.
        assert_eq!(rp.team_id, None);
        assert_eq!(rp.gitignore_template, None);
    }

    #[test]
    fn late_initialize_never_clears_or_flips() {
        let mut rp = RepositoryParameters {
            private: Some(true),
            has_wiki: Some(false),
            ..Default::default()
        };
        late_initialize(&mut rp, &observed());
        assert_eq!(rp.private, Some(true));
        assert_eq!(rp.has_wiki, Some(false));
    }

    #[test]
    fn organization_inferred_only_for_org_owner() {
        let mut rp = RepositoryParameters::default();
        late_initialize(&mut rp, &observed());
        assert_eq!(rp.organization.as_deref(), Some("acme"));

        // A personal repository never gains an organization, even when an
        // organization sub-record happens to be present.
        let mut personal = observed();
        personal.owner.as_mut().unwrap().kind = Some("User".into());
        let mut rp = RepositoryParameters::default();
        late_initialize(&mut rp, &personal);
        assert_eq!(rp.organization, None);
    }

    #[test]
    fn organization_inference_tolerates_missing_subrecords() {
        let mut bare = observed();
        bare.owner = None;
        bare.organization = None;
        let mut rp = RepositoryParameters::default();
        late_initialize(&mut rp, &bare);
        assert_eq!(rp.organization, None);

        // Org-typed owner but no organization login: still no inference.
        let mut no_login = observed();
        no_login.organization = Some(Default::default());
        let mut rp = RepositoryParameters::default();
        late_initialize(&mut rp, &no_login);
        assert_eq!(rp.organization, None);
    }

    #[test]
    fn observation_projects_status_fields() {
        let obs = generate_observation(&observed());
        assert_eq!(obs.id, 1296269);
        assert_eq!(obs.name, "hello-world");
        assert_eq!(obs.full_name, "acme/hello-world");
        assert_eq!(obs.html_url, "https://github.com/acme/hello-world");
        assert_eq!(obs.stargazers_count, 80);
        assert_eq!(obs.language, "Rust");
        assert!(!obs.fork);
        assert_eq!(obs.topics, vec!["rust".to_string(), "tooling".to_string()]);
        assert!(obs.created_at.is_some());
        let perms = obs.permissions.as_ref().unwrap();
        assert_eq!(perms.len(), 3);
        assert_eq!(perms.get("admin"), Some(&true));
        // Fields the source never reported come out as zero values.
        assert_eq!(obs.network_count, 0);
        assert_eq!(obs.mirror_url, "");
    }

    #[test]
    fn observation_copies_do_not_alias_source() {
        let source = observed();
        let mut obs = generate_observation(&source);
        obs.topics.push("injected".into());
        obs.permissions.as_mut().unwrap().insert("maintain".into(), true);

        assert_eq!(source.topics.as_ref().unwrap().len(), 2);
        assert!(!source.permissions.as_ref().unwrap().contains_key("maintain"));
    }

    #[test]
    fn observation_permissions_absent_without_source() {
        let mut source = observed();
        source.permissions = None;
        let obs = generate_observation(&source);
        assert!(obs.permissions.is_none());
    }

    struct InMemoryRepositories {
        repos: Mutex<HashMap<String, Repository>>,
    }

    impl InMemoryRepositories {
        fn seeded(repo: Repository) -> Self {
            let key = repo.full_name.clone().unwrap();
            Self { repos: Mutex::new(HashMap::from([(key, repo)])) }
        }
    }

    #[async_trait::async_trait]
    impl RepositoriesService for InMemoryRepositories {
        async fn get(&self, owner: &str, name: &str) -> ClientResult<Repository> {
            self.repos
                .lock()
                .unwrap()
                .get(&format!("{owner}/{name}"))
                .cloned()
                .ok_or_else(|| ClientError::NotFound(format!("{owner}/{name}")))
        }

        async fn create(&self, org: &str, repo: &Repository) -> ClientResult<Repository> {
            let name = repo.name.clone().unwrap_or_default();
            let key = format!("{org}/{name}");
            let mut repos = self.repos.lock().unwrap();
            if repos.contains_key(&key) {
                return Err(ClientError::Conflict(key));
            }
            let mut stored = repo.clone();
            stored.full_name = Some(key.clone());
            repos.insert(key, stored.clone());
            Ok(stored)
        }

        async fn edit(&self, owner: &str, name: &str, repo: &Repository) -> ClientResult<Repository> {
            let key = format!("{owner}/{name}");
            let mut repos = self.repos.lock().unwrap();
            if !repos.contains_key(&key) {
                return Err(ClientError::NotFound(key));
            }
            repos.insert(key, repo.clone());
            Ok(repo.clone())
        }

        async fn delete(&self, owner: &str, name: &str) -> ClientResult<()> {
            let key = format!("{owner}/{name}");
            match self.repos.lock().unwrap().remove(&key) {
                Some(_) => Ok(()),
                None => Err(ClientError::NotFound(key)),
            }
        }
    }

    #[tokio::test]
    async fn reconcile_cycle_converges_through_service() {
        let svc = InMemoryRepositories::seeded(observed());
        let mut rp = RepositoryParameters {
            name: "hello-world".into(),
            private: Some(true),
            ..Default::default()
        };

        let current = svc.get("acme", "hello-world").await.unwrap();
        late_initialize(&mut rp, &current);
        assert_eq!(rp.organization.as_deref(), Some("acme"));
        assert_eq!(rp.has_wiki, Some(true));

        // Declared privacy differs from the observation, so drift is reported
        // and the loop issues a corrective edit.
        assert!(!is_up_to_date(&rp, &current).unwrap());
        let desired = override_parameters(&rp, clone_repository(&current).unwrap());
        svc.edit("acme", "hello-world", &desired).await.unwrap();

        let refreshed = svc.get("acme", "hello-world").await.unwrap();
        assert!(is_up_to_date(&rp, &refreshed).unwrap());
        assert_eq!(generate_observation(&refreshed).name, "hello-world");

        svc.delete("acme", "hello-world").await.unwrap();
        assert!(matches!(
            svc.get("acme", "hello-world").await,
            Err(ClientError::NotFound(_))
        ));
    }
}
