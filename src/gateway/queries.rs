//! GraphQL documents sent to the STRATZ API.

pub const GAME_VERSIONS: &str = r#"
query {
  constants {
    gameVersions {
      id
      name
      asOfDateTime
    }
  }
}
"#;

pub const HEROES: &str = r#"
query($gameVersionId: Short, $language: LanguageEnum) {
  constants {
    heroes(gameVersionId: $gameVersionId, language: $language) {
      id
      name
      displayName
      shortName
      aliases
    }
  }
}
"#;

pub const WIN_DAY: &str = r#"
query($take: Int, $bracketIds: [RankBracket], $positionIds: [MatchPlayerPositionType], $gameModeIds: [GameModeEnumType]) {
  heroStats {
    winDay(
      take: $take,
      bracketIds: $bracketIds,
      positionIds: $positionIds,
      gameModeIds: $gameModeIds
    ) {
      day
      heroId
      winCount
      matchCount
      gameVersionId
    }
  }
}
"#;

pub const HERO_MATCHUP: &str = r#"
query($heroId: Short!, $bracketBasicIds: [RankBracketBasicEnum], $orderBy: Byte, $take: Int) {
  heroStats {
    matchUp(
      heroId: $heroId,
      bracketBasicIds: $bracketBasicIds,
      orderBy: $orderBy,
      take: $take
    ) {
      heroId
      with {
        heroId2
        winCount
        matchCount
        synergy
      }
      vs {
        heroId2
        winCount
        matchCount
        synergy
      }
    }
  }
}
"#;
