//! Swagger-to-project association by directory proximity.
//!
//! Each swagger file pairs with the project sharing the deepest common
//! ancestor directory. Among projects with the same shared depth, an ancestor
//! of the swagger file wins, then the deeper project, then the
//! lexicographically smaller path. A project qualifies only when it shares at
//! least one leading path segment with the swagger file or is an ancestor of
//! it (which covers a project at the scan root itself).

use tsv_core::{Pairing, SwaggerFile, TypeSpecProject};

/// Pair every swagger file with its nearest project, if any.
#[must_use]
pub fn pair(swagger_files: &[SwaggerFile], projects: &[TypeSpecProject]) -> Vec<Pairing> {
    swagger_files
        .iter()
        .map(|file| Pairing {
            swagger: file.path.clone(),
            project: nearest_project(&file.path, projects).map(String::from),
        })
        .collect()
}

/// Candidate ranking key: shared depth, ancestor flag, project depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Proximity {
    shared: usize,
    is_ancestor: bool,
    depth: usize,
}

fn nearest_project<'a>(swagger: &str, projects: &'a [TypeSpecProject]) -> Option<&'a str> {
    let swagger_dir = parent_segments(swagger);

    let mut best: Option<(Proximity, &str)> = None;
    for project in projects {
        let segments = path_segments(&project.path);
        let shared = swagger_dir
            .iter()
            .zip(segments.iter())
            .take_while(|(a, b)| a == b)
            .count();
        let is_ancestor = shared == segments.len();

        if shared == 0 && !is_ancestor {
            continue;
        }

        let candidate = Proximity {
            shared,
            is_ancestor,
            depth: segments.len(),
        };
        let better = match &best {
            None => true,
            // Equal proximity: keep the lexicographically smaller path.
            Some((current, path)) => {
                candidate > *current || (candidate == *current && project.path.as_str() < *path)
            }
        };
        if better {
            best = Some((candidate, project.path.as_str()));
        }
    }

    best.map(|(_, path)| path)
}

fn path_segments(path: &str) -> Vec<&str> {
    if path == "." {
        return Vec::new();
    }
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn parent_segments(file_path: &str) -> Vec<&str> {
    let mut segments = path_segments(file_path);
    segments.pop();
    segments
}
