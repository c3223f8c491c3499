//! Display implementations for domain models.
//!
//! All implementations produce markdown for rich terminal display. Statuses
//! are derived at format time from the schedule window and completion flag,
//! with one clock read per top-level value being formatted.

use std::fmt;

use jiff::Zoned;

use super::datetime::LocalDateTime;
use crate::models::{
    ActivityEntry, Document, Member, Mission, Plan, ProgressReport, Project, ProjectSummary,
    Role, ScheduleWindow, Status, TrackedAction, TrackedEntity, User,
};

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ScheduleWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.starts_on, self.ends_on)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let today = Zoned::now().date();

        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status(today).with_icon())?;
        writeln!(f, "- Window: {}", self.schedule)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.members.is_empty() {
            writeln!(f, "\n## Members")?;
            writeln!(f)?;
            for member in &self.members {
                writeln!(f, "- User {} ({})", member.user_id, member.role)?;
            }
        }

        if self.plans.is_empty() {
            writeln!(f, "\nNo plans in this project.")?;
        } else {
            writeln!(f, "\n## Plans")?;
            writeln!(f)?;
            for plan in &self.plans {
                write!(f, "{}", plan)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let today = Zoned::now().date();

        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status(today).with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Window: {}", self.schedule)?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.missions.is_empty() {
            writeln!(f)?;
            for mission in &self.missions {
                writeln!(
                    f,
                    "- {}. {} ({})",
                    mission.id,
                    mission.title,
                    mission.status(today).with_icon()
                )?;
            }
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let today = Zoned::now().date();

        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status(today).with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Window: {}", self.schedule)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_plans > 0 {
            format!(" ({}/{})", self.completed_plans, self.total_plans)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status.with_icon())?;
        writeln!(f, "- **Window**: {}", self.schedule)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }

        writeln!(f, "- **Members**: {}", self.member_count)?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}. {} (registered {})",
            self.id,
            self.username,
            LocalDateTime(&self.created_at)
        )
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- User {} — {} (since {})",
            self.user_id,
            self.role,
            LocalDateTime(&self.added_at)
        )
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Location: {}", self.location)?;
        if let Some(note) = &self.note {
            writeln!(f, "- Note: {note}")?;
        }
        writeln!(f, "- Added: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### Report {} — {} (by user {})",
            self.id, self.reported_on, self.author_id
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.body)?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for TrackedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TrackedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- [{}] user {} {} {} {}",
            LocalDateTime(&self.recorded_at),
            self.actor_id,
            self.action,
            self.entity,
            self.entity_id
        )?;
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        writeln!(f)
    }
}
