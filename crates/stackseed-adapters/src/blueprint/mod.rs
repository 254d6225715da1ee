//! The built-in real-estate blueprint.
//!
//! A React/TypeScript client, a Node/TypeScript server backed by Postgres
//! through Prisma, a Python ML service, JMeter load tests and a monitoring
//! stack. [`real_estate_layout`] is the skeleton, [`bootstrap_commands`] the
//! package-manager and VCS commands that run inside it afterwards.

mod placeholders;

use std::path::PathBuf;

use stackseed_core::domain::{COMPOSE_HEADER, CommandSpec, ProjectLayout};

/// Default project directory name.
pub const DEFAULT_PROJECT_DIR: &str = "real-estate-website";

const DIRECTORIES: &[&str] = &[
    "client/public",
    "client/src/components",
    "client/src/pages",
    "client/src/services",
    "client/src/styles",
    "client/src/feedback",
    "server/src/controllers",
    "server/src/middlewares",
    "server/src/models",
    "server/src/routes",
    "server/src/services",
    "server/src/database",
    "server/src/config",
    "server/src/scripts",
    "ml-service/src/models",
    "ml-service/src/preprocessors",
];

const EMPTY_FILES: &[&str] = &[
    ".gitignore",
    "README.md",
    "client/tailwind.config.js",
    "client/tsconfig.json",
    "client/package.json",
    "server/.env",
    "server/tsconfig.json",
    "server/package.json",
    "ml-service/Dockerfile",
    "ml-service/src/app.py",
    "ml-service/src/requirements.txt",
];

const PLACEHOLDERS: &[(&str, &str)] = &[
    ("client/src/pages/Home.tsx", "// Home page placeholder content"),
    ("client/src/pages/AboutUs.tsx", "// About Us page placeholder content"),
    ("client/src/pages/Login.tsx", "// Login page placeholder content"),
    (
        "client/src/pages/CreateAccount.tsx",
        "// Create Account page placeholder content",
    ),
    (
        "client/src/pages/DeleteAccount.tsx",
        "// Delete Account page placeholder content",
    ),
    (
        "client/src/components/Header.tsx",
        "// Header component placeholder content",
    ),
    (
        "client/src/components/Footer.tsx",
        "// Footer component placeholder content",
    ),
    (
        "client/src/components/PropertyCard.tsx",
        "// Property Card component placeholder content",
    ),
    (
        "client/src/components/SearchBar.tsx",
        "// Search Bar component placeholder content",
    ),
    ("client/src/feedback/FeedbackForm.tsx", placeholders::FEEDBACK_FORM),
    (
        "server/src/routes/authRoutes.ts",
        "// Authentication routes placeholder content",
    ),
    (
        "server/src/routes/propertyRoutes.ts",
        "// Property routes placeholder content",
    ),
    (
        "server/src/controllers/authController.ts",
        "// Authentication controller placeholder content",
    ),
    (
        "server/src/controllers/propertyController.ts",
        "// Property controller placeholder content",
    ),
    ("server/src/models/userModel.ts", "// User model placeholder content"),
    (
        "server/src/models/propertyModel.ts",
        "// Property model placeholder content",
    ),
    (
        "server/src/database/prisma/schema.prisma",
        placeholders::PRISMA_SCHEMA,
    ),
    ("server/src/scripts/setup-database.ts", placeholders::SETUP_DATABASE),
    ("server/src/config/secrets.ts", placeholders::SECRETS),
    (
        "server/src/scripts/provision-certificate.ts",
        placeholders::PROVISION_CERTIFICATE,
    ),
    ("performance-tests/load-test.jmx", placeholders::LOAD_TEST),
];

/// What to do once the skeleton is in place.
pub const NEXT_STEPS: &[&str] = &[
    "Update the Dockerfile and docker-compose.yml file for containerization.",
    "Implement the backend API routes, controllers, and models in the 'server' directory.",
    "Implement the frontend pages and components in the 'client' directory.",
    "Implement user authentication and account management using Firebase Authentication.",
    "Integrate the ML service by implementing the Flask API and preprocessing scripts.",
    "Set up the database and configure secrets using the provided scripts and configurations.",
    "Provision SSL/TLS certificates using the provided script.",
    "Integrate performance testing and monitoring using the provided load test script and monitoring tools.",
    "Test and refine the implemented features.",
    "Deploy the application to a hosting platform.",
    "Monitor and iterate based on user feedback and requirements.",
];

/// The real-estate skeleton rooted at `root`.
///
/// `docker-compose.yml` is seeded with the compose header only when it is
/// missing, so services appended by earlier runs survive.
pub fn real_estate_layout(root: impl Into<PathBuf>) -> ProjectLayout {
    let mut layout = ProjectLayout::new(root);

    for dir in DIRECTORIES {
        layout.add_directory(*dir);
    }
    for file in EMPTY_FILES {
        layout.add_file(*file, "");
    }
    layout.add_seed_file("docker-compose.yml", COMPOSE_HEADER);
    for (path, content) in PLACEHOLDERS {
        layout.add_file(*path, *content);
    }

    layout
}

/// Bootstrap commands in execution order; working directories are relative
/// to the project root.
pub fn bootstrap_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("npm").args(["init", "-y"]).messages(
            "Initialized a new Node.js project",
            "Failed to initialize a new Node.js project",
        ),
        CommandSpec::new("npm")
            .args([
                "install",
                "express",
                "pg",
                "firebase",
                "dotenv",
                "jsonwebtoken",
                "bcrypt",
                "prisma",
                "aws-sdk",
            ])
            .messages(
                "Installed backend dependencies",
                "Failed to install backend dependencies",
            ),
        CommandSpec::new("npx")
            .args(["create-react-app", ".", "--template", "typescript", "--use-npm"])
            .in_dir("client")
            .messages(
                "Created a new React app with TypeScript",
                "Failed to create a new React app with TypeScript",
            ),
        CommandSpec::new("npm")
            .args(["install", "axios", "react-router-dom", "firebase"])
            .in_dir("client")
            .messages(
                "Installed additional frontend dependencies",
                "Failed to install additional frontend dependencies",
            ),
        CommandSpec::new("npm")
            .args([
                "install",
                "-D",
                "tailwindcss@latest",
                "postcss@latest",
                "autoprefixer@latest",
            ])
            .in_dir("client")
            .messages(
                "Installed Tailwind CSS and its dependencies",
                "Failed to install Tailwind CSS and its dependencies",
            ),
        CommandSpec::new("npx")
            .args(["tailwindcss", "init", "-p"])
            .in_dir("client")
            .messages(
                "Initialized Tailwind CSS configuration",
                "Failed to initialize Tailwind CSS configuration",
            ),
        CommandSpec::new("python")
            .args(["-m", "venv", "venv"])
            .in_dir("ml-service")
            .messages(
                "Created a new virtual environment for the ML service",
                "Failed to create a new virtual environment for the ML service",
            ),
        CommandSpec::new(venv_pip())
            .args([
                "install",
                "flask",
                "numpy",
                "pandas",
                "scikit-learn",
                "joblib",
                "flask-cors",
                "jmeter",
                "grafana",
                "prometheus",
            ])
            .in_dir("ml-service")
            .messages(
                "Installed ML service dependencies",
                "Failed to install ML service dependencies",
            ),
        CommandSpec::new("git").arg("init").messages(
            "Initialized a new Git repository",
            "Failed to initialize a new Git repository",
        ),
    ]
}

/// pip inside the freshly created virtualenv, relative to `ml-service/`.
fn venv_pip() -> String {
    if cfg!(windows) {
        r"venv\Scripts\pip.exe".to_string()
    } else {
        "venv/bin/pip".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use stackseed_core::domain::WriteMode;

    #[test]
    fn layout_is_valid() {
        let layout = real_estate_layout(DEFAULT_PROJECT_DIR);
        assert!(layout.validate().is_ok());
        assert_eq!(layout.root(), Path::new("real-estate-website"));
        assert_eq!(layout.directories().count(), DIRECTORIES.len());
        assert_eq!(
            layout.files().count(),
            EMPTY_FILES.len() + PLACEHOLDERS.len() + 1
        );
    }

    #[test]
    fn placeholder_text_is_literal() {
        let layout = real_estate_layout("site");
        let home = layout.file("client/src/pages/Home.tsx").unwrap();
        assert_eq!(home.content, "// Home page placeholder content");
        assert_eq!(home.mode, WriteMode::Overwrite);

        let form = layout.file("client/src/feedback/FeedbackForm.tsx").unwrap();
        assert!(form.content.starts_with("\nimport React, { useState } from 'react';\n"));
        assert!(form.content.ends_with("export default FeedbackForm;\n"));

        let schema = layout.file("server/src/database/prisma/schema.prisma").unwrap();
        assert!(schema.content.starts_with("\ndatasource db {"));

        let jmx = layout.file("performance-tests/load-test.jmx").unwrap();
        assert!(jmx.content.starts_with("<?xml version=\"1.0\""));

        let cert = layout
            .file("server/src/scripts/provision-certificate.ts")
            .unwrap();
        assert!(cert.content.contains("`--email=${email}`"));
    }

    #[test]
    fn compose_file_is_seeded_once() {
        let layout = real_estate_layout("site");
        let compose = layout.file("docker-compose.yml").unwrap();
        assert_eq!(compose.mode, WriteMode::CreateIfMissing);
        assert_eq!(compose.content, COMPOSE_HEADER);
    }

    #[test]
    fn empty_files_are_empty() {
        let layout = real_estate_layout("site");
        for path in EMPTY_FILES {
            assert!(layout.file(path).unwrap().is_empty(), "{path}");
        }
    }

    #[test]
    fn bootstrap_order_and_directories() {
        let commands = bootstrap_commands();
        let summary: Vec<_> = commands
            .iter()
            .map(|c| (c.working_dir.clone(), c.program.clone()))
            .collect();

        assert_eq!(commands.len(), 9);
        assert_eq!(commands[0].command_line(), "npm init -y");
        assert_eq!(
            commands[2].command_line(),
            "npx create-react-app . --template typescript --use-npm"
        );
        assert_eq!(summary[2].0, PathBuf::from("client"));
        assert_eq!(summary[6].0, PathBuf::from("ml-service"));
        assert!(commands[7].program.contains("pip"));
        assert!(commands[7].args.ends_with(&[
            "jmeter".to_string(),
            "grafana".to_string(),
            "prometheus".to_string()
        ]));
        let git = commands.last().unwrap();
        assert_eq!(git.command_line(), "git init");
        assert!(git.working_dir.as_os_str().is_empty());
    }

    #[test]
    fn next_steps_cover_the_handover() {
        assert_eq!(NEXT_STEPS.len(), 11);
        assert!(NEXT_STEPS[0].starts_with("Update the Dockerfile"));
    }
}
