use std::sync::LazyLock;

use folio_models::portfolio::Profile;

use crate::strings;

pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| Profile {
    name: "Nafiul Hafiz".into(),
    headline: "DevSecOps Engineer".into(),
    about: strings(&[
        "I'm a DevSecOps Engineer with expertise in building secure, automated CI/CD pipelines and infrastructure. With a background in both development and security, I bridge the gap between rapid delivery and robust protection.",
        "My approach integrates security at every stage of the development lifecycle, ensuring that applications are not only delivered quickly but also with confidence in their security posture.",
        "When I'm not securing pipelines, you'll find me contributing to open source security tools, participating in CTF competitions, and staying current with the latest in cloud security practices.",
    ]),
    highlights: strings(&[
        "Kubernetes | Docker | AWS | Terraform | CI/CD | Security Automation",
        "5+ years in DevOps and Security",
    ]),
    email: "contact@devsecops.dev".parse().unwrap(),
    location: "San Francisco, CA".into(),
    github: "https://github.com/devsecops".parse().unwrap(),
    linkedin: "https://linkedin.com/in/devsecops".parse().unwrap(),
    availability: "Open to new opportunities".into(),
});
