//! Change-set computation over a real repository, built object-by-object so
//! no git binary is required.

use std::collections::BTreeSet;
use std::path::Path;

use pretty_assertions::assert_eq;
use tsv_git::{GitError, changed_paths, repo_root};

/// Init a repository and give it a committer identity via its local config.
fn init_with_identity(dir: &Path) -> gix::Repository {
    gix::init(dir).expect("init repo");
    let config = dir.join(".git").join("config");
    let mut text = std::fs::read_to_string(&config).expect("read config");
    text.push_str("\n[user]\n\tname = Tester\n\temail = tester@example.com\n");
    std::fs::write(&config, text).expect("write config");
    gix::open(dir).expect("reopen repo")
}

fn blob(repo: &gix::Repository, content: &str) -> gix::ObjectId {
    repo.write_blob(content.as_bytes())
        .expect("write blob")
        .detach()
}

fn tree(repo: &gix::Repository, entries: Vec<gix::objs::tree::Entry>) -> gix::ObjectId {
    repo.write_object(&gix::objs::Tree { entries })
        .expect("write tree")
        .detach()
}

/// Entries must stay sorted in git tree order (directories sort as `name/`).
fn entry(name: &str, kind: gix::objs::tree::EntryKind, oid: gix::ObjectId) -> gix::objs::tree::Entry {
    gix::objs::tree::Entry {
        mode: kind.into(),
        filename: name.into(),
        oid,
    }
}

fn commit(
    repo: &gix::Repository,
    message: &str,
    root: gix::ObjectId,
    parents: Vec<gix::ObjectId>,
) -> gix::ObjectId {
    repo.commit("HEAD", message, root, parents)
        .expect("commit")
        .detach()
}

/// Two commits: the second edits one swagger file and adds another under
/// `specification/`, leaving the README untouched.
fn build_two_commit_repo(dir: &Path) -> (gix::Repository, gix::ObjectId) {
    use gix::objs::tree::EntryKind::{Blob, Tree};

    let repo = init_with_identity(dir);

    let readme = blob(&repo, "spec repo\n");
    let widgets_v1 = blob(&repo, "{ \"swagger\": \"2.0\" }\n");
    let spec_v1 = tree(&repo, vec![entry("widgets.json", Blob, widgets_v1)]);
    let root_v1 = tree(
        &repo,
        vec![
            entry("README.md", Blob, readme),
            entry("specification", Tree, spec_v1),
        ],
    );
    let base = commit(&repo, "initial", root_v1, Vec::new());

    let widgets_v2 = blob(&repo, "{ \"swagger\": \"2.0\", \"info\": {} }\n");
    let gadgets = blob(&repo, "{ \"swagger\": \"2.0\" }\n");
    let spec_v2 = tree(
        &repo,
        vec![
            entry("gadgets.json", Blob, gadgets),
            entry("widgets.json", Blob, widgets_v2),
        ],
    );
    let root_v2 = tree(
        &repo,
        vec![
            entry("README.md", Blob, readme),
            entry("specification", Tree, spec_v2),
        ],
    );
    commit(&repo, "regenerate widgets, add gadgets", root_v2, vec![base]);

    (repo, base)
}

#[test]
fn diff_between_commits_lists_changed_paths() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let (_repo, base) = build_two_commit_repo(tmp.path());

    let changes = changed_paths(tmp.path(), &base.to_string()).expect("changed paths");

    let expected: BTreeSet<String> = [
        "specification/gadgets.json".to_string(),
        "specification/widgets.json".to_string(),
    ]
    .into_iter()
    .collect();
    assert_eq!(changes.paths, expected);
    assert_eq!(changes.base, base.to_string());
    assert!(!changes.head.is_empty());
}

#[test]
fn repo_root_resolves_from_subdirectory() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let (_repo, _base) = build_two_commit_repo(tmp.path());
    let sub = tmp.path().join("specification");
    std::fs::create_dir_all(&sub).expect("mkdir");

    let root = repo_root(&sub).expect("repo root");
    assert_eq!(
        root.canonicalize().expect("canonicalize"),
        tmp.path().canonicalize().expect("canonicalize")
    );
}

#[test]
fn unresolvable_ref_is_reported() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let (_repo, _base) = build_two_commit_repo(tmp.path());

    let result = changed_paths(tmp.path(), "no-such-branch");
    assert!(matches!(
        result,
        Err(GitError::RefNotFound { spec, .. }) if spec == "no-such-branch"
    ));
}
