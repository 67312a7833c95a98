//! Snapshot tests
//!
//! Renders each generated file for a fixed two-host input and compares
//! against inline snapshots.

use invgen::inventory::{pair_hosts, render_group_vars, render_host_vars, render_hosts};

fn sample_hosts() -> Vec<invgen::inventory::Host> {
    pair_hosts(
        vec!["10.0.0.5".to_string(), "10.0.0.6".to_string()],
        vec!["i-abc".to_string(), "i-def".to_string()],
    )
}

#[test]
fn hosts_file() {
    insta::assert_snapshot!(render_hosts(&sample_hosts(), "lb.example.com"), @r#"
    # TechAcademy Ansible Inventory
    # Generated from Terraform output

    [web_servers]
    web-server-1 ansible_host=10.0.0.5 ansible_user=ubuntu server_id=i-abc
    web-server-2 ansible_host=10.0.0.6 ansible_user=ubuntu server_id=i-def

    [all:children]
    web_servers

    [web_servers:vars]
    ansible_ssh_private_key_file=~/.ssh/id_rsa
    ansible_ssh_common_args='-o StrictHostKeyChecking=no'
    ansible_python_interpreter=/usr/bin/python3
    load_balancer_dns=lb.example.com
    "#);
}

#[test]
fn group_vars_file() {
    insta::assert_snapshot!(render_group_vars().unwrap(), @r#"
    # Web servers group variables
    app_name: techacademy
    app_user: ubuntu
    app_dir: /opt/techacademy
    git_repository: https://github.com/your-org/techacademy.git
    git_branch: main
    environment: production
    node_version: '18'
    pm2_instances: max
    "#);
}

#[test]
fn host_vars_file() {
    let hosts = sample_hosts();

    insta::assert_snapshot!(render_host_vars(&hosts[0]).unwrap(), @r#"
    # Host variables for web-server-1
    ansible_host: 10.0.0.5
    server_id: i-abc
    server_role: web
    server_index: 1
    "#);
}
