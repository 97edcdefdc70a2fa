use crate::domain::model::Channel;

/// 頻道與獎勵的對照表，建立後不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardCatalog {
    channels: Vec<Channel>,
}

impl RewardCatalog {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    /// 名稱完全比對（區分大小寫），重複時取第一筆
    pub fn find(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|channel| channel.name == name)
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl Default for RewardCatalog {
    fn default() -> Self {
        Self::new(vec![
            Channel::new("SPORTS", ["CHAMPIONS_LEAGUE_FINAL_TICKET"]),
            Channel::new("KIDS", Vec::<String>::new()),
            Channel::new("MUSIC", ["KARAOKE_PRO_MICROPHONE"]),
            Channel::new("NEWS", Vec::<String>::new()),
            Channel::new("MOVIES", ["PIRATES_OF_THE_CARIBBEAN_COLLECTION"]),
        ])
    }
}
