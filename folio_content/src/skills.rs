use std::sync::LazyLock;

use folio_models::portfolio::{Skill, SkillCategory, SkillGroup};

pub static SKILLS: LazyLock<Vec<SkillGroup>> = LazyLock::new(|| {
    vec![
        SkillGroup {
            category: SkillCategory::Tools,
            skills: vec![
                skill("Burp Suite", 95, "Web application security testing"),
                skill("Acunetix", 90, "Automated vulnerability scanner"),
                skill("Nessus", 90, "Vulnerability assessment tool"),
                skill("Nmap", 95, "Network discovery and security auditing"),
                skill("OWASP ZAP", 85, "Web application security scanner"),
                skill("Wazuh SIEM", 85, "Security information and event management"),
                skill("SonarQube", 80, "Code quality and security analysis"),
                skill("ELK Stack", 85, "Elasticsearch, Logstash, and Kibana"),
                skill("Grafana", 80, "Monitoring and observability"),
                skill("Prometheus", 75, "Systems monitoring and alerting"),
            ],
        },
        SkillGroup {
            category: SkillCategory::Security,
            skills: vec![
                skill("VAPT (Web/API/Mobile)", 95, "Vulnerability Assessment & Penetration Testing"),
                skill("OWASP Top 10", 95, "Web application security standards"),
                skill("SOC Analysis", 90, "Security Operations Center analysis"),
                skill("Threat Intelligence", 85, "Cyber threat analysis and response"),
                skill("Kubernetes Security", 85, "Container orchestration security"),
                skill("WAF Configuration", 80, "Web Application Firewall setup"),
                skill("VPN Management", 85, "Virtual Private Network administration"),
                skill("OAuth 2.0 (Keycloak)", 80, "Identity and access management"),
            ],
        },
        SkillGroup {
            category: SkillCategory::Infrastructure,
            skills: vec![
                skill("Nginx", 90, "Web server and reverse proxy"),
                skill("HAProxy", 85, "Load balancer and proxy server"),
                skill("Cloudflare", 85, "CDN and security services"),
                skill("Docker", 90, "Container orchestration and deployment"),
                skill("Kubernetes", 85, "Container orchestration at scale"),
                skill("OpenShift", 75, "Enterprise Kubernetes platform"),
                skill("VMware", 80, "Virtualization platform"),
                skill("Proxmox", 75, "Open-source virtualization management"),
            ],
        },
        SkillGroup {
            category: SkillCategory::Databases,
            skills: vec![
                skill("MongoDB", 85, "NoSQL document database"),
                skill("CouchDB", 75, "Document-oriented NoSQL database"),
                skill("MySQL", 80, "Relational database management"),
                skill("PostgreSQL", 80, "Advanced relational database"),
                skill("Database Security", 85, "Securing database systems"),
            ],
        },
        SkillGroup {
            category: SkillCategory::OperatingSystems,
            skills: vec![
                skill("Kali Linux", 95, "Penetration testing distribution"),
                skill("Red Hat", 85, "Enterprise Linux distribution"),
                skill("Parrot OS", 90, "Security-focused operating system"),
                skill("Linux Administration", 90, "System administration and hardening"),
            ],
        },
        SkillGroup {
            category: SkillCategory::Programming,
            skills: vec![
                skill("Python", 90, "Automation and scripting"),
                skill("Bash", 85, "Shell scripting and automation"),
                skill("AI Automation", 80, "Co-pilot, n8n workflow automation"),
                skill("Embedded Systems", 70, "Hardware programming and IoT"),
            ],
        },
    ]
});

fn skill(name: &str, proficiency: u8, description: &str) -> Skill {
    Skill {
        name: name.into(),
        proficiency: proficiency.try_into().unwrap(),
        description: Some(description.into()),
    }
}
