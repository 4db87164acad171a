use crate::domain::model::{Experience, NavItem, Profile, Project, Skill};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "#about",
        label: "About",
    },
    NavItem {
        href: "#experience",
        label: "Experience",
    },
    NavItem {
        href: "#skills",
        label: "Skills",
    },
    NavItem {
        href: "#projects",
        label: "Projects",
    },
    NavItem {
        href: "#contact",
        label: "Contact",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "React",
        level: "Advanced",
        color: "bg-blue-500",
    },
    Skill {
        name: "Next.js",
        level: "Advanced",
        color: "bg-gray-800",
    },
    Skill {
        name: "TypeScript",
        level: "Intermediate",
        color: "bg-blue-600",
    },
    Skill {
        name: "Tailwind CSS",
        level: "Advanced",
        color: "bg-teal-500",
    },
    Skill {
        name: "Node.js",
        level: "Intermediate",
        color: "bg-green-600",
    },
    Skill {
        name: "MongoDB",
        level: "Intermediate",
        color: "bg-green-500",
    },
    Skill {
        name: "PostgreSQL",
        level: "Intermediate",
        color: "bg-blue-700",
    },
    Skill {
        name: "Git",
        level: "Advanced",
        color: "bg-orange-500",
    },
];

pub const EXPERIENCES: &[Experience] = &[Experience {
    title: "Frontend Developer",
    company: "TechCorp Solutions",
    location: "San Francisco, CA",
    duration: "Jan 2023 - Present",
    description: "Developed responsive web applications using React and Next.js. \
        Collaborated with design teams to implement pixel-perfect UI components \
        and improved application performance by 40%.",
    technologies: &["React", "Next.js", "TypeScript", "Tailwind CSS"],
}];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with payment integration, \
            user authentication, and admin dashboard.",
        tech: &["Next.js", "TypeScript", "Stripe", "MongoDB"],
        image: "/placeholder.svg?height=200&width=300",
        github: "#",
        live: "#",
    },
    Project {
        title: "Task Management App",
        description: "Collaborative task management application with real-time \
            updates and team collaboration features.",
        tech: &["React", "Node.js", "Socket.io", "PostgreSQL"],
        image: "/placeholder.svg?height=200&width=300",
        github: "#",
        live: "#",
    },
    Project {
        title: "Weather Dashboard",
        description: "Interactive weather dashboard with location-based forecasts \
            and beautiful data visualizations.",
        tech: &["React", "Chart.js", "Weather API", "Tailwind"],
        image: "/placeholder.svg?height=200&width=300",
        github: "#",
        live: "#",
    },
];

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: "Devaraju G".to_string(),
            tagline: "Passionate developer with 2 years of experience creating modern web \
                applications. I love turning ideas into beautiful, functional digital experiences."
                .to_string(),
            bio: vec![
                "I'm a passionate full-stack developer with over 2 years of experience in \
                 creating modern web applications. My journey started with curiosity about how \
                 websites work, and it has evolved into a deep love for crafting efficient, \
                 user-friendly digital solutions."
                    .to_string(),
                "I specialize in React, Next.js, and modern JavaScript frameworks, with a strong \
                 foundation in both frontend and backend development. I'm always eager to learn \
                 new technologies and take on challenging projects."
                    .to_string(),
            ],
            email: "alex.johnson@email.com".to_string(),
            linkedin: "linkedin.com/in/alexjohnson".to_string(),
            github: "github.com/alexjohnson".to_string(),
            resume_path: "/Devaraju_resume.pdf".to_string(),
        }
    }
}
