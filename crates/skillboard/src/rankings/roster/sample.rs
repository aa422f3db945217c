use super::super::domain::{
    Achievement, AchievementKind, Skill, SkillId, SkillLevel, User, UserId, UserRole, WorkSample,
    WorkSampleKind,
};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn student(
    id: &str,
    name: &str,
    college: &str,
    department: &str,
    year: u8,
    bio: &str,
    specializations: &[&str],
) -> User {
    User {
        id: UserId::from(id),
        name: name.to_string(),
        email: format!(
            "{}@college.edu",
            name.split_whitespace().next().unwrap_or(id).to_lowercase()
        ),
        role: UserRole::Student,
        bio: bio.to_string(),
        college: college.to_string(),
        department: department.to_string(),
        year: Some(year),
        position: None,
        specializations: specializations.iter().map(|s| s.to_string()).collect(),
        avatar: None,
    }
}

fn achievement(id: &str, title: &str, description: &str, kind: AchievementKind) -> Achievement {
    Achievement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date(2024, 5, 1),
        kind,
    }
}

fn work_sample(id: &str, title: &str, description: &str, kind: WorkSampleKind) -> WorkSample {
    WorkSample {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        url: None,
        image_url: None,
        kind,
    }
}

struct SkillSeed<'a> {
    id: &'a str,
    user_id: &'a str,
    title: &'a str,
    category: &'a str,
    description: &'a str,
    level: SkillLevel,
    tags: &'a [&'a str],
}

impl SkillSeed<'_> {
    fn build(self, work_samples: Vec<WorkSample>, achievements: Vec<Achievement>) -> Skill {
        Skill {
            id: SkillId(self.id.to_string()),
            user_id: UserId::from(self.user_id),
            title: self.title.to_string(),
            category: self.category.to_string(),
            description: self.description.to_string(),
            level: self.level,
            tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
            achievements,
            work_samples,
        }
    }
}

pub(super) fn users() -> Vec<User> {
    vec![
        student(
            "1",
            "Alice Johnson",
            "Tech University",
            "Computer Science",
            3,
            "Full-stack developer with passion for React",
            &["React", "Node.js", "TypeScript"],
        ),
        student(
            "2",
            "Bob Smith",
            "Tech University",
            "Data Science",
            2,
            "Data science enthusiast",
            &["Python", "Machine Learning", "Data Analysis"],
        ),
        student(
            "3",
            "Carol Davis",
            "Art Institute",
            "Digital Arts",
            4,
            "Creative designer and artist",
            &["Graphic Design", "Photography"],
        ),
        student(
            "4",
            "David Wilson",
            "Tech University",
            "Computer Science",
            3,
            "Mobile app developer",
            &["React Native", "Flutter", "iOS"],
        ),
        student(
            "5",
            "Emma Brown",
            "Design College",
            "Web Design",
            2,
            "Web developer and UX designer",
            &["HTML/CSS", "JavaScript", "UX Design"],
        ),
    ]
}

pub(super) fn skills() -> Vec<Skill> {
    vec![
        SkillSeed {
            id: "s1",
            user_id: "1",
            title: "Advanced React Development",
            category: "Programming",
            description: "Expert-level React with hooks and state management",
            level: SkillLevel::Expert,
            tags: &["React", "Redux", "TypeScript"],
        }
        .build(
            vec![
                work_sample("w1", "E-commerce App", "Full-stack e-commerce", WorkSampleKind::Project),
                work_sample("w2", "Dashboard UI", "Admin dashboard", WorkSampleKind::Project),
            ],
            vec![
                achievement("a1", "Hackathon Winner", "First place", AchievementKind::Competition),
                achievement(
                    "a2",
                    "React Certification",
                    "Advanced cert",
                    AchievementKind::Certification,
                ),
            ],
        ),
        SkillSeed {
            id: "s2",
            user_id: "2",
            title: "Machine Learning Specialist",
            category: "Data Analysis",
            description: "Advanced ML algorithms and data processing",
            level: SkillLevel::Advanced,
            tags: &["Python", "TensorFlow", "Scikit-learn"],
        }
        .build(
            vec![work_sample(
                "w3",
                "Prediction Model",
                "Stock price predictor",
                WorkSampleKind::Project,
            )],
            vec![achievement(
                "a3",
                "Research Paper",
                "Published ML research",
                AchievementKind::Recognition,
            )],
        ),
        SkillSeed {
            id: "s3",
            user_id: "3",
            title: "Brand Identity Expert",
            category: "Design",
            description: "Professional brand design and visual identity",
            level: SkillLevel::Expert,
            tags: &["Adobe Creative Suite", "Branding", "Logo Design"],
        }
        .build(
            vec![
                work_sample(
                    "w4",
                    "Brand Package",
                    "Complete brand identity",
                    WorkSampleKind::Portfolio,
                ),
                work_sample("w5", "Logo Collection", "50+ logo designs", WorkSampleKind::Portfolio),
            ],
            vec![
                achievement("a4", "Design Award", "Best student design", AchievementKind::Award),
                achievement(
                    "a5",
                    "Client Project",
                    "Real client work",
                    AchievementKind::Recognition,
                ),
            ],
        ),
        SkillSeed {
            id: "s4",
            user_id: "4",
            title: "Mobile App Development",
            category: "Programming",
            description: "Cross-platform mobile applications",
            level: SkillLevel::Advanced,
            tags: &["React Native", "Flutter", "Firebase"],
        }
        .build(
            vec![work_sample(
                "w6",
                "Fitness App",
                "Health tracking app",
                WorkSampleKind::Project,
            )],
            vec![achievement(
                "a6",
                "App Store Featured",
                "Featured app",
                AchievementKind::Recognition,
            )],
        ),
        SkillSeed {
            id: "s5",
            user_id: "5",
            title: "Frontend Development",
            category: "Programming",
            description: "Modern web development with focus on UX",
            level: SkillLevel::Intermediate,
            tags: &["JavaScript", "CSS", "Vue.js"],
        }
        .build(
            vec![work_sample(
                "w7",
                "Portfolio Site",
                "Personal portfolio",
                WorkSampleKind::Project,
            )],
            vec![achievement(
                "a7",
                "Internship",
                "Tech company internship",
                AchievementKind::Recognition,
            )],
        ),
    ]
}
