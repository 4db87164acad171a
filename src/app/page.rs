use crate::core::form::{ContactForm, Notification};
use crate::core::theme::ThemeState;
use crate::domain::content::{EXPERIENCES, NAV_ITEMS, PROJECTS, SKILLS};
use crate::domain::model::Profile;
use maud::{html, Markup, DOCTYPE};

const SECTION_DIVIDER: &str = "w-20 h-1 bg-gradient-to-r from-purple-600 to-blue-600 mx-auto";
const BADGE: &str = "text-xs bg-purple-100 dark:bg-purple-900 text-purple-800 dark:text-purple-200";

pub struct PageView<'a> {
    pub profile: &'a Profile,
    pub theme: ThemeState,
    pub menu_open: bool,
    pub form: &'a ContactForm,
    pub notification: Option<&'a Notification>,
}

pub fn render_page(view: &PageView<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class=[view.theme.document_class()] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (view.profile.display_name) " | Portfolio" }
            }
            body class="min-h-screen transition-colors duration-300" {
                @if let Some(notification) = view.notification {
                    (toast(notification))
                }
                (navigation(view))
                (hero(view.profile))
                (about(view.profile))
                (experience())
                (skills())
                (projects())
                (contact(view.profile, view.form))
                (footer(view.profile))
            }
        }
    }
}

fn section_heading(title: &str) -> Markup {
    html! {
        div class="text-center mb-12" {
            h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4" { (title) }
            div class=(SECTION_DIVIDER) {}
        }
    }
}

fn theme_toggle(theme: ThemeState) -> Markup {
    let label = if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" };
    html! {
        form method="post" action="/theme" class="inline" {
            button type="submit" aria-label=(label) {
                @if theme.is_dark() { "☀" } @else { "☾" }
            }
        }
    }
}

fn toast(notification: &Notification) -> Markup {
    match notification {
        Notification::Loading { message } => html! {
            div class="toast toast-loading" role="status" { (message) }
        },
        Notification::Success {
            title,
            description,
            duration_ms,
        } => html! {
            div class="toast toast-success" role="status" data-duration=(duration_ms) {
                strong { (title) }
                p { (description) }
            }
        },
        Notification::Error {
            title,
            description,
            duration_ms,
        } => html! {
            div class="toast toast-error" role="alert" data-duration=(duration_ms) {
                strong { (title) }
                p { (description) }
            }
        },
    }
}

fn navigation(view: &PageView<'_>) -> Markup {
    html! {
        nav class="fixed top-0 w-full backdrop-blur-md z-50 border-b" {
            div class="flex justify-between items-center py-4 px-4" {
                div class="text-2xl font-bold" { (view.profile.display_name) }
                div class="hidden md:flex items-center space-x-8" {
                    @for item in NAV_ITEMS {
                        a href=(item.href) { (item.label) }
                    }
                    (theme_toggle(view.theme))
                }
                div class="md:hidden flex items-center space-x-4" {
                    (theme_toggle(view.theme))
                    @if view.menu_open {
                        a href="/" aria-label="Close menu" { "✕" }
                    } @else {
                        a href="/?menu=open" aria-label="Open menu" { "☰" }
                    }
                }
            }
            @if view.menu_open {
                div id="mobile-menu" class="md:hidden py-4 border-t" {
                    div class="flex flex-col space-y-4" {
                        // 跳到錨點時重新載入不帶 menu 參數，選單隨之關閉
                        @for item in NAV_ITEMS {
                            a href={ "/" (item.href) } class="px-4 py-2" { (item.label) }
                        }
                    }
                }
            }
        }
    }
}

fn hero(profile: &Profile) -> Markup {
    html! {
        section class="pt-20 pb-16 px-4 text-center" {
            h1 class="text-4xl md:text-6xl font-bold mb-6" {
                "Software " span class="bg-clip-text text-transparent" { "Developer" }
            }
            p class="text-xl mb-8 max-w-3xl mx-auto" { (profile.tagline) }
            div class="flex flex-col sm:flex-row gap-4 justify-center" {
                a href="#contact" class="btn btn-primary" { "Get In Touch" }
                a href={ "https://" (profile.github) } target="_blank" rel="noopener noreferrer" class="btn btn-outline" {
                    "View GitHub"
                }
                a href=(profile.resume_path) download class="btn btn-outline" { "Download Resume" }
            }
        }
    }
}

fn about(profile: &Profile) -> Markup {
    html! {
        section id="about" class="py-16 px-4" {
            (section_heading("About Me"))
            div class="grid md:grid-cols-2 gap-12 items-center" {
                div {
                    h3 class="text-2xl font-semibold mb-4" { "Building Digital Solutions for 2+ Years" }
                    @for paragraph in &profile.bio {
                        p class="mb-6 leading-relaxed" { (paragraph) }
                    }
                    div class="flex flex-wrap gap-4" {
                        span { "2+ Years Experience" }
                        span { "15+ Projects Completed" }
                    }
                }
            }
        }
    }
}

fn experience() -> Markup {
    html! {
        section id="experience" class="py-16 px-4" {
            (section_heading("Work Experience"))
            div class="space-y-8" {
                @for exp in EXPERIENCES {
                    article class="card p-8" {
                        h3 class="text-xl font-bold mb-1" { (exp.title) }
                        p class="text-lg font-semibold" { (exp.company) }
                        p class="text-sm" { (exp.duration) " · " (exp.location) }
                        p class="mb-4 leading-relaxed" { (exp.description) }
                        div class="flex flex-wrap gap-2" {
                            @for tech in exp.technologies {
                                span class=(BADGE) { (tech) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn skills() -> Markup {
    html! {
        section id="skills" class="py-16 px-4" {
            (section_heading("Skills & Technologies"))
            div class="grid grid-cols-2 md:grid-cols-4 gap-6" {
                @for skill in SKILLS {
                    div class="card p-6 text-center" {
                        div class={ "w-12 h-12 rounded-lg mx-auto mb-4 " (skill.color) } {}
                        h3 class="font-semibold mb-2" { (skill.name) }
                        span class=(BADGE) { (skill.level) }
                    }
                }
            }
        }
    }
}

fn projects() -> Markup {
    html! {
        section id="projects" class="py-16 px-4" {
            (section_heading("Featured Projects"))
            div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8" {
                @for project in PROJECTS {
                    article class="card overflow-hidden" {
                        img src=(project.image) alt=(project.title) class="h-48 w-full object-cover";
                        h3 class="text-xl" { (project.title) }
                        p { (project.description) }
                        div class="flex flex-wrap gap-2 mb-4" {
                            @for tech in project.tech {
                                span class=(BADGE) { (tech) }
                            }
                        }
                        div class="flex gap-4" {
                            a href=(project.github) class="btn btn-outline flex-1" { "Code" }
                            a href=(project.live) class="btn btn-primary flex-1" { "Live Demo" }
                        }
                    }
                }
            }
        }
    }
}

fn contact(profile: &Profile, form: &ContactForm) -> Markup {
    let fields = form.fields();
    html! {
        section id="contact" class="py-16 px-4" {
            (section_heading("Get In Touch"))
            p class="text-center text-lg" {
                "Have a project in mind? Let's work together to bring your ideas to life!"
            }
            div class="grid md:grid-cols-2 gap-12" {
                div {
                    h3 class="text-2xl font-semibold mb-6" { "Let's Connect" }
                    dl class="space-y-6" {
                        dt { "Email" } dd { (profile.email) }
                        dt { "LinkedIn" } dd { (profile.linkedin) }
                        dt { "GitHub" } dd { (profile.github) }
                    }
                }
                div class="card shadow-xl" {
                    h3 { "Send Message" }
                    p { "Fill out the form below and I'll get back to you as soon as possible." }
                    form method="post" action="/contact#contact" class="space-y-4" {
                        label for="name" { "Name" }
                        input id="name" name="name" value=(fields.name) placeholder="Your name" required;
                        label for="email" { "Email" }
                        input id="email" name="email" type="email" value=(fields.email)
                            placeholder="your.email@example.com" required;
                        label for="message" { "Message" }
                        textarea id="message" name="message" placeholder="Tell me about your project..."
                            class="min-h-[120px]" required { (fields.message) }
                        button type="submit" class="w-full" disabled[form.is_submitting()] {
                            @if form.is_submitting() { "Sending..." } @else { "Send Message" }
                        }
                    }
                }
            }
        }
    }
}

fn footer(profile: &Profile) -> Markup {
    html! {
        footer class="py-12 px-4 text-center" {
            div class="text-2xl font-bold mb-4" { (profile.display_name) }
            p class="mb-6" { "Building the future, one line of code at a time." }
            div class="flex justify-center space-x-6" {
                a href={ "https://" (profile.github) } { "GitHub" }
                a href={ "https://" (profile.linkedin) } { "LinkedIn" }
                a href={ "mailto:" (profile.email) } { "Email" }
            }
        }
    }
}
