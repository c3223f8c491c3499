//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers over `Vec`s provide Display implementations with
//! graceful empty-collection handling, without putting presentation logic on
//! the models themselves.

use std::{fmt, ops::Index};

use crate::models::{ActivityEntry, Document, Member, ProgressReport, ProjectSummary, User};

/// Newtype wrapper for displaying collections of project summaries.
pub struct ProjectSummaries(pub Vec<ProjectSummary>);

impl ProjectSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of project summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the project summary at the given index.
    pub fn get(&self, index: usize) -> Option<&ProjectSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the project summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ProjectSummaries {
    type Output = ProjectSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ProjectSummaries {
    type Item = ProjectSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProjectSummaries {
    type Item = &'a ProjectSummary;
    type IntoIter = std::slice::Iter<'a, ProjectSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ProjectSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No projects found.")
        } else {
            for summary in &self.0 {
                write!(f, "{}", summary)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of users.
pub struct Users(pub Vec<User>);

impl fmt::Display for Users {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No users registered.")
        } else {
            for user in &self.0 {
                write!(f, "{}", user)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a project's member list.
pub struct Members(pub Vec<Member>);

impl Members {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of members in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Members {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No members in this project.")
        } else {
            for member in &self.0 {
                write!(f, "{}", member)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a project's documents.
pub struct Documents(pub Vec<Document>);

impl fmt::Display for Documents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No documents attached.")
        } else {
            for document in &self.0 {
                write!(f, "{}", document)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a project's progress reports.
pub struct Reports(pub Vec<ProgressReport>);

impl fmt::Display for Reports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No reports filed.")
        } else {
            for report in &self.0 {
                write!(f, "{}", report)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a project's activity log.
pub struct ActivityLog(pub Vec<ActivityEntry>);

impl fmt::Display for ActivityLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No activity recorded.")
        } else {
            for entry in &self.0 {
                write!(f, "{}", entry)?;
            }
            Ok(())
        }
    }
}
