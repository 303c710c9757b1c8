use std::sync::LazyLock;

use folio_models::portfolio::{TimelineEntry, TimelineEntryId};

use crate::strings;

pub static EXPERIENCES: LazyLock<Vec<TimelineEntry>> = LazyLock::new(|| {
    vec![
        TimelineEntry {
            id: TimelineEntryId::new("1".to_owned()),
            title: "Associate Cybersecurity Engineer".into(),
            organization: "Business Automation (High Tech Park, Rajshahi)".into(),
            start_date: "2023-01".into(),
            end_date: "Present".into(),
            description: "Leading high-impact national, government and international projects security and infrastructure management. Conducting VAPT on BD Government projects including Hajj, Mutation/Land, BIDA, SDG. Managing SOC operations, threat intelligence, and collaborating with HPE team for international deployments. Maintaining high-traffic load balancers (millions/day), cloud architecture, and implementing DevSecOps practices with CI/CD pipeline management.".into(),
            skills: strings(&[
                "VAPT",
                "SOC Analysis",
                "Threat Intelligence",
                "Load Balancer Security",
                "Cloud Security",
                "DevSecOps",
                "CI/CD",
                "MLOps",
                "AI Integration",
                "Burp Suite",
                "Acunetix",
                "Nessus",
                "OWASP",
                "Kubernetes Security",
            ]),
            expanded: false,
        },
        TimelineEntry {
            id: TimelineEntryId::new("2".to_owned()),
            title: "Web Security Intern".into(),
            organization: "Web Security".into(),
            start_date: "2022-01".into(),
            end_date: "2022-12".into(),
            description: "Gained hands-on experience in web application security testing and vulnerability assessment. Participated in bug bounty programs and achieved certification in Cybersecurity Ethical Hacking. Developed foundational skills in penetration testing methodologies and security tools.".into(),
            skills: strings(&[
                "Web Security",
                "Penetration Testing",
                "Bug Bounty",
                "Ethical Hacking",
                "OWASP Top 10",
            ]),
            expanded: false,
        },
        TimelineEntry {
            id: TimelineEntryId::new("3".to_owned()),
            title: "Data Science & Machine Learning Certification".into(),
            organization: "Sotyan Bose Science Club, BUET".into(),
            start_date: "2020-01".into(),
            end_date: "2020-12".into(),
            description: "Completed comprehensive training in data science and machine learning. Worked on large datasets, trained various ML models, and completed multiple machine learning projects. Gained expertise in data engineering and model deployment practices.".into(),
            skills: strings(&[
                "Python",
                "Machine Learning",
                "Data Engineering",
                "Model Training",
                "Large Datasets",
            ]),
            expanded: false,
        },
    ]
});

pub static CERTIFICATIONS: LazyLock<Vec<TimelineEntry>> = LazyLock::new(|| {
    vec![
        TimelineEntry {
            id: TimelineEntryId::new("cert1".to_owned()),
            title: "Cybersecurity Ethical Hacking".into(),
            organization: "Professional Certification".into(),
            start_date: "2022-01".into(),
            end_date: "Present".into(),
            description: "Advanced certification in ethical hacking methodologies, penetration testing, and vulnerability assessment. Covers comprehensive security testing approaches for web applications, APIs, and mobile applications.".into(),
            skills: Vec::new(),
            expanded: false,
        },
        TimelineEntry {
            id: TimelineEntryId::new("cert2".to_owned()),
            title: "NASA Space App Challenge Participant".into(),
            organization: "NASA".into(),
            start_date: "2018-01".into(),
            end_date: "2018-12".into(),
            description: "Participated in NASA Space App Challenge 2018, working on real-life problem solving using large space data from NASA. Developed 'Wildfires Detection & Prediction' project utilizing satellite data and machine learning algorithms.".into(),
            skills: Vec::new(),
            expanded: false,
        },
    ]
});
