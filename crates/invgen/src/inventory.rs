//! inventory rendering
//!
//! [pair_hosts] zips the `web_server_ips` and `web_server_ids` outputs
//! positionally; pairing stops at the shorter list (extra entries are
//! dropped, not rejected). The render functions return the complete file
//! body, comment header included, so the caller writes each file in one
//! shot.
//!
//! The variable files are YAML and go through [serde_yaml] with small
//! `Serialize` structs (field order is file order). The `hosts` file is
//! ansible INI and is assembled by hand.
use serde::Serialize;

/// One provisioned web server
///
/// `index` is 1-based and names the host (`web-server-<index>`).
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct Host {
    pub index: usize,
    pub address: String,
    pub id: String,
}

/// Pairs addresses and ids positionally, dropping unmatched tails
pub fn pair_hosts(addresses: Vec<String>, ids: Vec<String>) -> Vec<Host> {
    addresses
        .into_iter()
        .zip(ids)
        .enumerate()
        .map(|(i, (address, id))| Host::new(i + 1, address, id))
        .collect()
}

/// Renders the grouped `hosts` file
pub fn render_hosts(hosts: &[Host], load_balancer_dns: &str) -> String {
    let mut out = String::new();
    out.push_str("# TechAcademy Ansible Inventory\n");
    out.push_str("# Generated from Terraform output\n\n");

    out.push_str("[web_servers]\n");
    for host in hosts {
        out.push_str(&format!(
            "web-server-{} ansible_host={} ansible_user=ubuntu server_id={}\n",
            host.index, host.address, host.id
        ));
    }
    out.push('\n');

    out.push_str("[all:children]\n");
    out.push_str("web_servers\n\n");

    out.push_str("[web_servers:vars]\n");
    out.push_str("ansible_ssh_private_key_file=~/.ssh/id_rsa\n");
    out.push_str("ansible_ssh_common_args='-o StrictHostKeyChecking=no'\n");
    out.push_str("ansible_python_interpreter=/usr/bin/python3\n");
    out.push_str(&format!("load_balancer_dns={load_balancer_dns}\n"));

    out
}

/// Group-level variables for the `web_servers` group
///
/// Fully static application metadata, not derived from the terraform
/// output.
#[derive(Debug, Serialize)]
struct GroupVars {
    app_name: &'static str,
    app_user: &'static str,
    app_dir: &'static str,
    git_repository: &'static str,
    git_branch: &'static str,
    environment: &'static str,
    node_version: &'static str,
    pm2_instances: &'static str,
}

impl Default for GroupVars {
    fn default() -> Self {
        Self {
            app_name: "techacademy",
            app_user: "ubuntu",
            app_dir: "/opt/techacademy",
            git_repository: "https://github.com/your-org/techacademy.git",
            git_branch: "main",
            environment: "production",
            node_version: "18",
            pm2_instances: "max",
        }
    }
}

/// Renders `group_vars/web_servers.yml` (identical on every run)
pub fn render_group_vars() -> Result<String, serde_yaml::Error> {
    let body = serde_yaml::to_string(&GroupVars::default())?;
    Ok(format!("# Web servers group variables\n{body}"))
}

#[derive(Debug, Serialize)]
struct HostVars<'h> {
    ansible_host: &'h str,
    server_id: &'h str,
    server_role: &'static str,
    server_index: usize,
}

/// Renders `host_vars/web-server-<n>.yml` for one host
pub fn render_host_vars(host: &Host) -> Result<String, serde_yaml::Error> {
    let vars = HostVars {
        ansible_host: &host.address,
        server_id: &host.id,
        server_role: "web",
        server_index: host.index,
    };

    let body = serde_yaml::to_string(&vars)?;
    Ok(format!("# Host variables for web-server-{}\n{body}", host.index))
}
