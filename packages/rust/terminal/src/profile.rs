//! Static profile content served by the interpreter.

pub const WHOAMI: &str = "ernesto_cruz
Systems & Network Engineer
Focus: Low-level Systems (Rust/C), Network Protocols, Hardened Infrastructure";

pub const PWD: &str = "/home/ernesto/projects";

pub const CD_REFUSAL: &str = "Nice try, but you're stuck here";
pub const SUDO_REFUSAL: &str = "ernesto is not in the sudoers file. This incident will be reported.";
pub const RM_REFUSAL: &str = "Permission denied: these projects are read-only";

pub const CONTACT: &str = " Email:    contact@faky.dev
 GitHub:   github.com/ernestoCruz05
 LinkedIn: linkedin.com/in/ernesto-cruz-a59866381

Type 'github' or 'linkedin' to open directly.";

pub const GITHUB_URL: &str = "https://github.com/ernestoCruz05";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/ernesto-cruz-a59866381/";

pub const COWSAY_DEFAULT: &str = "Moo! Hire Ernesto!";

pub const WELCOME_HINT: &str = "Type 'help' for available commands.";

pub const MAN_PAGE: &str = "ERNESTO(1)                   User Commands                   ERNESTO(1)

NAME
       ernesto - Systems & Network Engineer

SYNOPSIS
       ernesto [--hire] [--contact] [--projects]

DESCRIPTION
       A passionate engineer specializing in low-level systems,
       network protocols, and infrastructure automation.

       Known for building reliable systems in unreliable networks.

OPTIONS
       --hire     Initiate recruitment process
       --rust     Enable high-performance mode
       --coffee   Required for optimal operation

BUGS
       None known. Only features.

AUTHOR
       Written by Ernesto Cruz.

SEE ALSO
       github(1), linkedin(1), projects(1)";

pub const PING: &str = "PING recruiter.company.com: 64 bytes: icmp_seq=0 ttl=64 time=0.042ms
--- recruiter.company.com ping statistics ---
1 packets transmitted, 1 received, 0% packet loss
Connection established! Ready to collaborate.";

pub const WELCOME_ART: &str = " ██████╗ ██████╗  ██████╗      ██╗███████╗ ██████╗████████╗███████╗
 ██╔══██╗██╔══██╗██╔═══██╗     ██║██╔════╝██╔════╝╚══██╔══╝██╔════╝
 ██████╔╝██████╔╝██║   ██║     ██║█████╗  ██║        ██║   ███████╗
 ██╔═══╝ ██╔══██╗██║   ██║██   ██║██╔══╝  ██║        ██║   ╚════██║
 ██║     ██║  ██║╚██████╔╝╚█████╔╝███████╗╚██████╗   ██║   ███████║
 ╚═╝     ╚═╝  ╚═╝ ╚═════╝  ╚════╝ ╚══════╝ ╚═════╝   ╚═╝   ╚══════╝";

pub const NEOFETCH_ART: &str = r"                   -`
                  .o+`
                 `ooo/
                `+oooo:
               `+oooooo:
               -+oooooo+:
             `/:-:++oooo+:
            `/++++/+++++++:
           `/++++++++++++++:
          `/+++ooooooooooooo/`
         ./ooosssso++osssssso+`
        .oossssso-````/ossssss+`
       -osssssso.      :ssssssso.
      :osssssss/        osssso+++.
     /ossssssss/        +ssssooo/-
   `/ossssso+/:-        -:/+osssso+-
  `+sso+:-`                 `.-/+oso:
 `++:.                           `-/+/
 .`                                 `/";

pub const NEOFETCH_HEADER: &str = "ernesto@portfolio";

/// `(label, value)` rows of the neofetch info panel.
pub const NEOFETCH_INFO: &[(&str, &str)] = &[
    ("OS", "Arch Linux x86_64"),
    ("Host", "Systems Engineer"),
    ("Kernel", "Rust, C, Python"),
    ("Uptime", "5+ years"),
    ("Shell", "zsh 5.9"),
    ("DE", "VS Code + Neovim"),
    ("Terminal", "Alacritty"),
    ("CPU", "Problem Solver"),
    ("Memory", "Caffeinated"),
];

/// One stop on the career timeline.
#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub period: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        period: "2023 - Present",
        title: "Engenharia Informática @ ISEC",
        detail: "Computer Engineering degree, focus on systems and networks",
    },
    Milestone {
        period: "2020 - 2023",
        title: "Self-taught Programming",
        detail: "Learned Rust, C, Python. Built home lab infrastructure and personal projects",
    },
];

/// A named group of `(skill, percent)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [(&'static str, u8)],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        name: "Languages",
        skills: &[("Rust", 85), ("C / C++", 75), ("Python", 80), ("Bash", 90)],
    },
    SkillGroup {
        name: "Infrastructure",
        skills: &[("Linux", 95), ("Docker", 85), ("Networking", 90), ("Ansible", 75)],
    },
];
