use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tja_rs::tja::decode_str;
use tja_rs::tja::model::*;

/// Every metadata key populated, mirrored against the full document tree.
#[test]
fn full_metadata() {
    const SRC: &str = "\
// Colorful Voice, metadata modified so that no two fields share a value.
TITLE:Colorful Voice
TITLEJA:カラフルボイス
TITLEEN:Beans
TITLECN:豆子繁體
SUBTITLE:--cosMo@bousouP feat. Hatsune Miku & GUMI
SUBTITLEJA:cosMo@暴走P feat.初音ミク・GUMI

BPM:240
WAVE:Colorful Voice.ogg
OFFSET:-2.169
DEMOSTART:44.158
GENRE:Oranges
SCOREMODE:2
MAKER:mom
LYRICS:熱情のスペクトラム.vtt
SONGVOL:2003
SEVOL:45
SIDE:2
LIFE:10023
GAME:Jube
HEADSCROLL:0.2
BGIMAGE:123.png
BGMOVIE:Colorful Voice.mp4
MOVIEOFFSET:1.5
TAIKOWEBSKIN:dir ../song_skins,name miku,song static,stage none,don fastscroll

COURSE:Oni
LEVEL:9
";

    let file = decode_str(SRC).expect("must be decoded");

    assert_eq!(
        file.metadata,
        Metadata {
            title: LocalizedString {
                default: Some("Colorful Voice".to_owned()),
                ja: Some("カラフルボイス".to_owned()),
                en: Some("Beans".to_owned()),
                cn: Some("豆子繁體".to_owned()),
                ..Default::default()
            },
            subtitle: LocalizedString {
                default: Some("--cosMo@bousouP feat. Hatsune Miku & GUMI".to_owned()),
                ja: Some("cosMo@暴走P feat.初音ミク・GUMI".to_owned()),
                ..Default::default()
            },
            bpm: Some(240.0),
            wave: Some(PathBuf::from("Colorful Voice.ogg")),
            offset: Some(-2.169),
            demo_start: Some(44.158),
            genre: Some("Oranges".to_owned()),
            score_mode: Some(ScoreMode::AcGen0),
            maker: Some("mom".to_owned()),
            lyrics: Some(PathBuf::from("熱情のスペクトラム.vtt")),
            song_vol: Some(2003.0),
            se_vol: Some(45.0),
            side: Some(Side::Ex),
            life: Some(10023),
            game: Some(Game::Jube),
            head_scroll: Some(0.2),
            bg_image: Some(PathBuf::from("123.png")),
            bg_movie: Some(PathBuf::from("Colorful Voice.mp4")),
            movie_offset: Some(1.5),
            taiko_web_skin: Some(TaikoWebSkin {
                dir: PathBuf::from("../song_skins"),
                name: "miku".to_owned(),
                song: Some("static".to_owned()),
                stage: Some("none".to_owned()),
                don: Some("fastscroll".to_owned()),
            }),
        }
    );
    assert_eq!(file.courses.len(), 1);
    assert_eq!(file.courses[0].difficulty, Some(Difficulty::Oni));
    assert_eq!(file.courses[0].stars, Some(9));
}

#[test]
fn empty_value_leaves_the_field_unset() {
    const SRC: &str = "\
TITLE:Example
BPM:
COURSE:Oni
";
    let file = decode_str(SRC).expect("must be decoded");
    assert_eq!(file.metadata.bpm, None);
    assert_eq!(
        file.metadata.title.default.as_deref(),
        Some("Example")
    );
}

#[test]
fn decode_accepts_any_buffered_reader() {
    let reader = std::io::BufReader::new("BPM:120\nCOURSE:Easy\n".as_bytes());
    let file = tja_rs::tja::decode(reader).expect("must be decoded");
    assert_eq!(file.metadata.bpm, Some(120.0));
    assert_eq!(file.courses[0].difficulty, Some(Difficulty::Easy));
}
