mod sample;

use super::domain::{Skill, User, UserId, UserRole};
use super::leaderboard::{build_leaderboard, RankedEntry, SkillsByUser};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum RosterError {
    Io(std::io::Error),
    Json(serde_json::Error),
    DuplicateUser(UserId),
    UnknownOwner { skill: String, user_id: UserId },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Io(err) => write!(f, "failed to read roster: {}", err),
            RosterError::Json(err) => write!(f, "invalid roster data: {}", err),
            RosterError::DuplicateUser(id) => write!(f, "user '{}' appears more than once", id),
            RosterError::UnknownOwner { skill, user_id } => write!(
                f,
                "skill '{}' belongs to unknown user '{}'",
                skill, user_id
            ),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Io(err) => Some(err),
            RosterError::Json(err) => Some(err),
            RosterError::DuplicateUser(_) | RosterError::UnknownOwner { .. } => None,
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Wire shape of a roster before duplicate and ownership checks.
#[derive(Debug, Deserialize)]
struct RawRoster {
    users: Vec<User>,
    #[serde(default)]
    skills: Vec<Skill>,
}

/// Immutable users-and-skills snapshot handed over by the data source.
///
/// Every construction path, `Deserialize` included, runs the same validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRoster")]
pub struct RosterSnapshot {
    users: Vec<User>,
    skills: Vec<Skill>,
}

impl TryFrom<RawRoster> for RosterSnapshot {
    type Error = RosterError;

    fn try_from(raw: RawRoster) -> Result<Self, Self::Error> {
        Self::new(raw.users, raw.skills)
    }
}

impl RosterSnapshot {
    /// Builds a snapshot, rejecting duplicate users and orphaned skills.
    pub fn new(users: Vec<User>, skills: Vec<Skill>) -> Result<Self, RosterError> {
        let snapshot = Self { users, skills };
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let file = std::fs::File::open(path.as_ref())?;
        let snapshot = Self::from_reader(file)?;
        info!(
            path = %path.as_ref().display(),
            users = snapshot.users.len(),
            skills = snapshot.skills.len(),
            "roster loaded"
        );
        Ok(snapshot)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RosterError> {
        let raw: RawRoster = serde_json::from_reader(reader)?;
        Self::try_from(raw)
    }

    /// Five-student roster used by demos and as the fallback data source.
    pub fn sample() -> Self {
        Self {
            users: sample::users(),
            skills: sample::skills(),
        }
    }

    fn validate(&self) -> Result<(), RosterError> {
        let mut seen: HashSet<&UserId> = HashSet::new();
        for user in &self.users {
            if !seen.insert(&user.id) {
                return Err(RosterError::DuplicateUser(user.id.clone()));
            }
        }

        if let Some(orphan) = self
            .skills
            .iter()
            .find(|skill| !seen.contains(&skill.user_id))
        {
            return Err(RosterError::UnknownOwner {
                skill: orphan.id.0.clone(),
                user_id: orphan.user_id.clone(),
            });
        }

        Ok(())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| &user.id == id)
    }

    pub fn skills_for(&self, id: &UserId) -> Vec<Skill> {
        self.skills
            .iter()
            .filter(|skill| &skill.user_id == id)
            .cloned()
            .collect()
    }

    pub fn skills_by_user(&self) -> SkillsByUser {
        let mut grouped = SkillsByUser::new();
        for skill in &self.skills {
            grouped
                .entry(skill.user_id.clone())
                .or_default()
                .push(skill.clone());
        }
        grouped
    }

    pub fn students(&self) -> Vec<User> {
        self.users
            .iter()
            .filter(|user| user.role == UserRole::Student)
            .cloned()
            .collect()
    }

    /// Ranks students only; mentors never appear on the leaderboard.
    pub fn student_leaderboard(&self) -> Vec<RankedEntry> {
        build_leaderboard(&self.students(), &self.skills_by_user())
    }
}
