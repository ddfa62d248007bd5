//! Question catalog and answer levels

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three scored network dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Connectivity,
    Clustering,
    Centrality,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::Connectivity,
        Dimension::Clustering,
        Dimension::Centrality,
    ];

    /// Section heading shown above the dimension's questions
    pub fn heading(self) -> &'static str {
        match self {
            Dimension::Connectivity => "Part A – Overall Connectivity",
            Dimension::Clustering => "Part B – Clustering",
            Dimension::Centrality => "Part C – Centrality",
        }
    }

    pub fn questions(self) -> [Question; 3] {
        match self {
            Dimension::Connectivity => [
                Question::CommunicationFrequency,
                Question::InformationFlow,
                Question::SpontaneousCommunication,
            ],
            Dimension::Clustering => [
                Question::WorkgroupOrganization,
                Question::GroupTransparency,
                Question::KnowledgeSharing,
            ],
            Dimension::Centrality => [
                Question::CentralConnectors,
                Question::InformationBrokerage,
                Question::DecisionMakingInfluence,
            ],
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Connectivity => "Connectivity",
            Dimension::Clustering => "Clustering",
            Dimension::Centrality => "Centrality",
        };
        write!(f, "{}", name)
    }
}

/// A five-point Likert answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Likert {
    VeryLow = 1,
    Low = 2,
    #[default]
    Medium = 3,
    High = 4,
    VeryHigh = 5,
}

impl Likert {
    pub const ALL: [Likert; 5] = [
        Likert::VeryLow,
        Likert::Low,
        Likert::Medium,
        Likert::High,
        Likert::VeryHigh,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Likert> {
        match value {
            1 => Some(Likert::VeryLow),
            2 => Some(Likert::Low),
            3 => Some(Likert::Medium),
            4 => Some(Likert::High),
            5 => Some(Likert::VeryHigh),
            _ => None,
        }
    }

    /// Zero-based position in a question's option list
    pub fn option_index(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for Likert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The nine questionnaire items, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    CommunicationFrequency,
    InformationFlow,
    SpontaneousCommunication,
    WorkgroupOrganization,
    GroupTransparency,
    KnowledgeSharing,
    CentralConnectors,
    InformationBrokerage,
    DecisionMakingInfluence,
}

impl Question {
    pub const ALL: [Question; 9] = [
        Question::CommunicationFrequency,
        Question::InformationFlow,
        Question::SpontaneousCommunication,
        Question::WorkgroupOrganization,
        Question::GroupTransparency,
        Question::KnowledgeSharing,
        Question::CentralConnectors,
        Question::InformationBrokerage,
        Question::DecisionMakingInfluence,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn dimension(self) -> Dimension {
        match self {
            Question::CommunicationFrequency
            | Question::InformationFlow
            | Question::SpontaneousCommunication => Dimension::Connectivity,
            Question::WorkgroupOrganization
            | Question::GroupTransparency
            | Question::KnowledgeSharing => Dimension::Clustering,
            Question::CentralConnectors
            | Question::InformationBrokerage
            | Question::DecisionMakingInfluence => Dimension::Centrality,
        }
    }

    /// Short name used when echoing selections
    pub fn title(self) -> &'static str {
        match self {
            Question::CommunicationFrequency => "Communication Frequency",
            Question::InformationFlow => "Information Flow",
            Question::SpontaneousCommunication => "Spontaneous Communication",
            Question::WorkgroupOrganization => "Workgroup Organization",
            Question::GroupTransparency => "Group Transparency",
            Question::KnowledgeSharing => "Knowledge Sharing",
            Question::CentralConnectors => "Central Connectors",
            Question::InformationBrokerage => "Information Brokerage",
            Question::DecisionMakingInfluence => "Decision Making Influence",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Question::CommunicationFrequency => {
                "How often does communication occur between all members of the organization?"
            }
            Question::InformationFlow => {
                "To what extent do existing processes enable continuous and accessible information flow?"
            }
            Question::SpontaneousCommunication => {
                "To what extent does spontaneous communication occur between members?"
            }
            Question::WorkgroupOrganization => {
                "To what extent do units organize into workgroups with strong internal connections?"
            }
            Question::GroupTransparency => {
                "To what extent do mechanisms enable transparency and information sharing within groups?"
            }
            Question::KnowledgeSharing => {
                "How ingrained is the habit of knowledge sharing within these workgroups?"
            }
            Question::CentralConnectors => {
                "How many individuals act as central connectors, bridging different parts of the network?"
            }
            Question::InformationBrokerage => {
                "How effective are these connectors at information brokerage between groups?"
            }
            Question::DecisionMakingInfluence => {
                "How much influence do these central individuals have on decision-making processes?"
            }
        }
    }

    /// Caption of the option selector
    pub fn selector(self) -> &'static str {
        match self {
            Question::CommunicationFrequency => "Select the frequency:",
            Question::CentralConnectors => "Select the number:",
            Question::InformationBrokerage => "Select the effectiveness:",
            Question::DecisionMakingInfluence => "Select the influence:",
            _ => "Select the extent:",
        }
    }

    /// Option labels, indexed by [`Likert::option_index`]
    pub fn options(self) -> &'static [&'static str; 5] {
        match self {
            Question::CommunicationFrequency => &[
                "Very low: Only a few communicate.",
                "Low: Some members communicate, but not regularly.",
                "Medium: Regular communication occurs between most members.",
                "High: Most members communicate frequently.",
                "Very high: All members communicate consistently.",
            ],
            Question::InformationFlow => &[
                "Very low: Information flow is very limited.",
                "Low: Information flow occurs occasionally and is only partially accessible.",
                "Medium: Information flow is consistent, but some gaps exist.",
                "High: Information flow is good, and most members can access information.",
                "Very high: Information flow is seamless, and everyone receives consistent access.",
            ],
            Question::SpontaneousCommunication => &[
                "Almost none occurs: organization members communicate only within formal activities.",
                "Occurs minimally: Limited spontaneous communication occurs in exceptional cases.",
                "Occurs moderately: Some members communicate spontaneously, but not consistently.",
                "Occurs extensively: Most communicate naturally, but formal initiatives are needed sometimes.",
                "Occurs naturally and consistently: Spontaneous communication is integral to daily activity.",
            ],
            Question::WorkgroupOrganization => &[
                "Very low: Teamwork is almost nonexistent.",
                "Low: Teamwork exists, but lacks organization.",
                "Medium: Teamwork exists, but not very organized.",
                "High: Teamwork is well-organized, but integration can be improved.",
                "Very high: Teamwork is strong and very organized.",
            ],
            Question::GroupTransparency => &[
                "Very low: Minimal transparency and limited sharing.",
                "Low: Transparency exists, but not consistently.",
                "Medium: Good transparency, but there is room for improvement.",
                "High: Most activities and updates are transparent and well-shared.",
                "Very high: Full transparency and constant information sharing.",
            ],
            Question::KnowledgeSharing => &[
                "Very low: Knowledge sharing is actively discouraged or impossible.",
                "Low: Knowledge sharing is rare and occurs only if strictly necessary.",
                "Medium: Knowledge sharing occurs when prompted or facilitated.",
                "High: Knowledge sharing is common and valued within workgroups.",
                "Very high: Knowledge sharing is a deeply ingrained habit, happening proactively.",
            ],
            Question::CentralConnectors => &[
                "Very few: Almost no individuals act as central connectors.",
                "Few: Some individuals occasionally bridge different parts of the network.",
                "Moderate number: Several individuals are recognized for connecting disparate groups.",
                "Many: Numerous individuals actively bridge and connect different network segments.",
                "Very many: Network connectivity heavily relies on a wide array of central connectors.",
            ],
            Question::InformationBrokerage => &[
                "Very ineffective: Brokers are rare, and information flow between groups is poor.",
                "Ineffective: Some brokerage occurs, but it is slow and often misses key information.",
                "Moderately effective: Brokers facilitate decent information flow, but with delays or gaps.",
                "Effective: Brokers ensure timely and relevant information reaches different groups.",
                "Very effective: Brokerage is a strong asset, ensuring rapid and comprehensive information exchange.",
            ],
            Question::DecisionMakingInfluence => &[
                "Very little: Decisions are made in isolation with minimal input from connectors.",
                "Little: Connectors have some input, but their influence on decisions is limited.",
                "Moderate: Connectors are consulted, and their input moderately influences decisions.",
                "Significant: Connectors play a key role in shaping and influencing decisions.",
                "Very significant: Connectors are integral to the decision-making process; their insights are crucial.",
            ],
        }
    }

    pub fn option_label(self, level: Likert) -> &'static str {
        self.options()[level.option_index()]
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likert_values() {
        for (i, level) in Likert::ALL.iter().enumerate() {
            assert_eq!(level.value() as usize, i + 1);
            assert_eq!(level.option_index(), i);
            assert_eq!(Likert::from_value(level.value()), Some(*level));
        }
        assert_eq!(Likert::from_value(0), None);
        assert_eq!(Likert::from_value(6), None);
        assert_eq!(Likert::default(), Likert::Medium);
    }

    #[test]
    fn test_questions_partition_dimensions() {
        for dim in Dimension::ALL {
            for q in dim.questions() {
                assert_eq!(q.dimension(), dim);
            }
        }
        for (i, q) in Question::ALL.iter().enumerate() {
            assert_eq!(q.index(), i);
        }
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(
            Question::CommunicationFrequency.option_label(Likert::VeryLow),
            "Very low: Only a few communicate."
        );
        assert!(Question::KnowledgeSharing
            .option_label(Likert::Medium)
            .starts_with("Medium:"));
        assert_eq!(Question::GroupTransparency.selector(), "Select the extent:");
    }
}
