use std::sync::LazyLock;

use folio_models::portfolio::{Project, ProjectCategory, ProjectId};

use crate::strings;

pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        Project {
            id: ProjectId::new("1".to_owned()),
            title: "MinIO Multinode Object Storage".into(),
            description: "Deployed and configured a highly available MinIO multinode cluster with comprehensive monitoring, OAuth 2.0 integration, and enterprise security features.".into(),
            category: ProjectCategory::Infrastructure,
            image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&q=80".parse().unwrap(),
            security_details: "The MinIO deployment implemented enterprise-grade security:\n\n- OAuth 2.0 integration with OIDC providers (Keycloak, Auth0)\n- TLS encryption for all client and server communications\n- IAM policies with fine-grained access controls\n- Bucket-level encryption with KMS integration\n- Network segmentation and firewall rules\n- Regular security audits and vulnerability assessments\n- LDAP/AD integration for user management\n- Multi-factor authentication enforcement".into(),
            cicd_details: "The deployment pipeline automated the entire infrastructure:\n\n- Infrastructure as Code with Terraform/Ansible\n- Automated cluster provisioning and configuration\n- Health checks and monitoring setup\n- Backup and disaster recovery automation\n- Performance benchmarking and optimization\n- Automated certificate management and renewal\n- Configuration drift detection and remediation\n- Blue-green deployment strategies for updates".into(),
            technologies: strings(&[
                "MinIO",
                "Kubernetes",
                "OAuth 2.0",
                "Prometheus",
                "Grafana",
                "Terraform",
                "Ansible",
                "TLS/SSL",
                "OIDC",
                "KMS",
            ]),
        },
        Project {
            id: ProjectId::new("2".to_owned()),
            title: "SOC Analyst Security Operations".into(),
            description: "Established and operated a Security Operations Center with 24/7 monitoring, incident response, threat hunting, and comprehensive security analytics.".into(),
            category: ProjectCategory::Security,
            image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&q=80".parse().unwrap(),
            security_details: "The SOC implementation provided comprehensive security operations:\n\n- 24/7 security monitoring and alerting\n- SIEM integration with multiple data sources\n- Threat intelligence feeds and correlation\n- Incident response playbooks and automation\n- Threat hunting and behavioral analysis\n- Vulnerability management and remediation\n- Security metrics and KPI reporting\n- Compliance monitoring and audit support".into(),
            cicd_details: "The SOC automation and tooling included:\n\n- SOAR platform for incident orchestration\n- Automated threat detection and response\n- Security tool integration and API automation\n- Custom dashboard and reporting automation\n- Incident ticketing and workflow management\n- Threat intelligence platform integration\n- Security awareness training automation\n- Compliance reporting and evidence collection".into(),
            technologies: strings(&[
                "Splunk",
                "QRadar",
                "Phantom SOAR",
                "MISP",
                "TheHive",
                "Cortex",
                "ELK Stack",
                "YARA",
                "Suricata",
                "MITRE ATT&CK",
            ]),
        },
        Project {
            id: ProjectId::new("3".to_owned()),
            title: "Kafka CDC Data Pipeline".into(),
            description: "Implemented a real-time Change Data Capture (CDC) pipeline using Apache Kafka for streaming database changes with security controls and monitoring.".into(),
            category: ProjectCategory::Infrastructure,
            image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80".parse().unwrap(),
            security_details: "The Kafka CDC pipeline implemented comprehensive security:\n\n- SASL/SCRAM authentication for all clients\n- TLS encryption for data in transit\n- ACL-based authorization for topic access\n- Schema registry with authentication\n- Data masking for sensitive fields\n- Audit logging for all data access\n- Network isolation and firewall rules\n- Regular security assessments and penetration testing".into(),
            cicd_details: "The CDC pipeline deployment included:\n\n- Infrastructure as Code with Terraform\n- Automated Kafka cluster provisioning\n- Schema evolution management\n- Connector deployment automation\n- Performance monitoring and alerting\n- Automated backup and recovery\n- Blue-green deployment for updates\n- Integration testing automation".into(),
            technologies: strings(&[
                "Apache Kafka",
                "Kafka Connect",
                "Debezium",
                "Schema Registry",
                "KSQL",
                "Prometheus",
                "Grafana",
                "Docker",
                "Kubernetes",
            ]),
        },
        Project {
            id: ProjectId::new("4".to_owned()),
            title: "OWASP Dependency Tracker".into(),
            description: "Deployed and configured OWASP Dependency-Track for continuous monitoring of software supply chain vulnerabilities across multiple projects.".into(),
            category: ProjectCategory::Security,
            image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&q=80".parse().unwrap(),
            security_details: "The OWASP Dependency-Track implementation provided:\n\n- Software Bill of Materials (SBOM) generation\n- Continuous vulnerability monitoring\n- Policy-based risk assessment\n- Integration with vulnerability databases\n- Automated security notifications\n- License compliance tracking\n- Supply chain risk analysis\n- API security for integrations".into(),
            cicd_details: "The CI/CD integration included:\n\n- Automated SBOM generation in build pipelines\n- Vulnerability scanning on every commit\n- Policy gates for deployment approval\n- Integration with existing CI/CD tools\n- Automated reporting and dashboards\n- Webhook notifications for critical vulnerabilities\n- Compliance reporting automation\n- Historical trend analysis".into(),
            technologies: strings(&[
                "OWASP Dependency-Track",
                "CycloneDX",
                "SPDX",
                "Jenkins",
                "GitLab CI",
                "Docker",
                "PostgreSQL",
                "REST API",
                "LDAP",
            ]),
        },
        Project {
            id: ProjectId::new("5".to_owned()),
            title: "Nextcloud Self-Hosted Platform".into(),
            description: "Deployed a secure, self-hosted Nextcloud instance with enterprise features, encryption, and comprehensive backup strategies.".into(),
            category: ProjectCategory::Infrastructure,
            image: "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?w=800&q=80".parse().unwrap(),
            security_details: "The Nextcloud deployment implemented enterprise security:\n\n- End-to-end encryption for all data\n- LDAP/AD integration for user management\n- Two-factor authentication enforcement\n- Brute force protection and rate limiting\n- File access control and sharing policies\n- Audit logging and monitoring\n- SSL/TLS encryption with HSTS\n- Regular security updates and hardening".into(),
            cicd_details: "The deployment pipeline included:\n\n- Infrastructure as Code with Ansible\n- Automated installation and configuration\n- Database setup and optimization\n- SSL certificate automation with Let's Encrypt\n- Backup and restore automation\n- Performance monitoring setup\n- Update management automation\n- Disaster recovery testing".into(),
            technologies: strings(&[
                "Nextcloud",
                "PHP",
                "MySQL",
                "Redis",
                "Apache/Nginx",
                "Let's Encrypt",
                "Ansible",
                "Docker",
                "LDAP",
            ]),
        },
        Project {
            id: ProjectId::new("6".to_owned()),
            title: "n8n Workflow Automation".into(),
            description: "Implemented n8n workflow automation platform for DevSecOps processes with secure integrations and monitoring capabilities.".into(),
            category: ProjectCategory::CiCd,
            image: "https://images.unsplash.com/photo-1518186285589-2f7649de83e0?w=800&q=80".parse().unwrap(),
            security_details: "The n8n automation platform security included:\n\n- Encrypted credential storage\n- OAuth 2.0 integration for external services\n- Webhook security with signature validation\n- Network isolation and access controls\n- Audit logging for all workflow executions\n- Secret management integration\n- Role-based access control\n- Regular security assessments".into(),
            cicd_details: "The automation workflows included:\n\n- Incident response automation\n- Security alert processing\n- Compliance reporting automation\n- Infrastructure provisioning triggers\n- Monitoring and alerting workflows\n- Integration with ticketing systems\n- Automated documentation generation\n- Performance metrics collection".into(),
            technologies: strings(&[
                "n8n",
                "Node.js",
                "PostgreSQL",
                "Redis",
                "Docker",
                "Kubernetes",
                "Webhook",
                "OAuth 2.0",
                "REST API",
            ]),
        },
        Project {
            id: ProjectId::new("7".to_owned()),
            title: "OpenTelemetry Observability".into(),
            description: "Implemented comprehensive observability solution using OpenTelemetry for distributed tracing, metrics, and logging across microservices.".into(),
            category: ProjectCategory::Infrastructure,
            image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80".parse().unwrap(),
            security_details: "The OTEL observability implementation secured:\n\n- Encrypted telemetry data transmission\n- Authentication for all collector endpoints\n- Sensitive data filtering and redaction\n- Access controls for observability data\n- Audit trails for data access\n- Compliance with data retention policies\n- Network segmentation for telemetry traffic\n- Regular security reviews of collected data".into(),
            cicd_details: "The observability pipeline included:\n\n- Automated instrumentation deployment\n- Collector configuration management\n- Dashboard and alerting automation\n- Performance baseline establishment\n- SLI/SLO monitoring setup\n- Incident response integration\n- Capacity planning automation\n- Cost optimization monitoring".into(),
            technologies: strings(&[
                "OpenTelemetry",
                "Jaeger",
                "Prometheus",
                "Grafana",
                "Elasticsearch",
                "Fluentd",
                "Kubernetes",
                "Docker",
                "Go",
            ]),
        },
        Project {
            id: ProjectId::new("8".to_owned()),
            title: "Secure Kubernetes Deployment".into(),
            description: "Implemented a secure Kubernetes deployment with Pod Security Policies, Network Policies, and RBAC for a financial services application.".into(),
            category: ProjectCategory::Security,
            image: "https://images.unsplash.com/photo-1667372393119-3d4c48d07fc9?w=800&q=80".parse().unwrap(),
            security_details: "This project focused on hardening a Kubernetes cluster for a financial services application. Key security implementations included:\n\n- Pod Security Policies to restrict container privileges\n- Network Policies for micro-segmentation\n- RBAC with least privilege principles\n- Secret management with HashiCorp Vault\n- Runtime security with Falco\n- Regular vulnerability scanning with Trivy".into(),
            cicd_details: "The CI/CD pipeline was built with GitLab CI and included:\n\n- Automated security scanning with SAST tools\n- Container image scanning before deployment\n- Infrastructure as Code validation\n- Automated testing and deployment\n- Compliance checks and audit logging".into(),
            technologies: strings(&[
                "Kubernetes",
                "RBAC",
                "Network Policies",
                "HashiCorp Vault",
                "Falco",
                "Trivy",
                "GitLab CI",
            ]),
        },
        Project {
            id: ProjectId::new("9".to_owned()),
            title: "Zero-Trust Pipeline Architecture".into(),
            description: "Designed and implemented a zero-trust CI/CD pipeline with comprehensive security controls and verification at each stage.".into(),
            category: ProjectCategory::CiCd,
            image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&q=80".parse().unwrap(),
            security_details: "The zero-trust pipeline architecture implemented:\n\n- Multi-factor authentication for all pipeline access\n- Signed commits and verification\n- Ephemeral build environments\n- Artifact provenance and attestation\n- Least privilege access controls\n- Comprehensive audit logging".into(),
            cicd_details: "The pipeline was built with GitHub Actions and included:\n\n- Branch protection rules\n- Required code reviews\n- Automated security scanning\n- Dependency verification\n- SLSA Level 3 compliance\n- Automated deployment with approval gates".into(),
            technologies: strings(&[
                "GitHub Actions",
                "Sigstore",
                "SLSA",
                "OPA",
                "Artifact Analysis",
                "Policy as Code",
            ]),
        },
        Project {
            id: ProjectId::new("10".to_owned()),
            title: "Infrastructure as Code Security".into(),
            description: "Developed a secure Infrastructure as Code framework with automated security scanning, policy enforcement, and compliance validation.".into(),
            category: ProjectCategory::Infrastructure,
            image: "https://images.unsplash.com/photo-1607799279861-4dd421887fb3?w=800&q=80".parse().unwrap(),
            security_details: "The IaC security framework included:\n\n- Static analysis of Terraform code\n- Policy as Code with OPA/Rego\n- Automated compliance checks for CIS benchmarks\n- Secret detection and prevention\n- Drift detection\n- Least privilege IAM configurations".into(),
            cicd_details: "The CI/CD pipeline for infrastructure included:\n\n- Pre-commit hooks for local validation\n- Automated plan and apply with approval gates\n- Security scanning with tfsec and checkov\n- Cost estimation\n- Documentation generation\n- State file encryption and secure storage".into(),
            technologies: strings(&[
                "Terraform",
                "AWS",
                "OPA/Rego",
                "tfsec",
                "checkov",
                "CIS Benchmarks",
                "GitOps",
            ]),
        },
        Project {
            id: ProjectId::new("11".to_owned()),
            title: "Container Security Platform".into(),
            description: "Built a comprehensive container security platform with vulnerability scanning, runtime protection, and compliance enforcement.".into(),
            category: ProjectCategory::Security,
            image: "https://images.unsplash.com/photo-1605745341112-85968b19335b?w=800&q=80".parse().unwrap(),
            security_details: "The container security platform provided:\n\n- Image vulnerability scanning\n- Base image verification\n- Runtime security monitoring\n- Network segmentation\n- Compliance enforcement\n- Incident response automation".into(),
            cicd_details: "The CI/CD integration included:\n\n- Pre-build security checks\n- In-pipeline vulnerability scanning\n- Automated policy enforcement\n- Build-time secrets management\n- Signed container images\n- Deployment gates based on security posture".into(),
            technologies: strings(&[
                "Docker",
                "Trivy",
                "Sysdig Falco",
                "OPA/Gatekeeper",
                "Notary",
                "Clair",
                "Jenkins",
            ]),
        },
        Project {
            id: ProjectId::new("12".to_owned()),
            title: "Automated Compliance Pipeline".into(),
            description: "Created an automated compliance pipeline that continuously validates infrastructure and applications against regulatory requirements.".into(),
            category: ProjectCategory::CiCd,
            image: "https://images.unsplash.com/photo-1633412802994-5c058f151b66?w=800&q=80".parse().unwrap(),
            security_details: "The compliance automation included:\n\n- Continuous compliance scanning\n- Policy as Code for regulatory requirements\n- Automated evidence collection\n- Compliance reporting\n- Remediation workflows\n- Audit trail generation".into(),
            cicd_details: "The pipeline architecture featured:\n\n- Compliance as Code implementation\n- Automated testing against compliance benchmarks\n- Integration with GRC tools\n- Continuous validation\n- Compliance dashboards\n- Automated documentation generation".into(),
            technologies: strings(&[
                "InSpec",
                "Chef Compliance",
                "AWS Config",
                "CloudFormation Guard",
                "Terraform Sentinel",
                "OSCAL",
            ]),
        },
        Project {
            id: ProjectId::new("13".to_owned()),
            title: "Cloud Security Posture Management".into(),
            description: "Implemented a comprehensive cloud security posture management solution with real-time monitoring, automated remediation, and compliance reporting.".into(),
            category: ProjectCategory::Infrastructure,
            image: "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?w=800&q=80".parse().unwrap(),
            security_details: "The CSPM solution provided:\n\n- Multi-cloud security posture assessment\n- Automated remediation for common misconfigurations\n- Compliance mapping to major frameworks\n- Risk scoring and prioritization\n- Continuous monitoring\n- Security drift detection".into(),
            cicd_details: "The implementation pipeline included:\n\n- Infrastructure as Code deployment\n- Automated configuration and integration\n- Continuous validation\n- Alerting and notification setup\n- Dashboard deployment\n- Integration with existing security tools".into(),
            technologies: strings(&[
                "AWS Security Hub",
                "Azure Security Center",
                "GCP Security Command Center",
                "Terraform",
                "CloudFormation",
                "Pulumi",
            ]),
        },
    ]
});
